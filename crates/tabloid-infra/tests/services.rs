//! Service behavior over the in-memory repositories.

use chrono::{DateTime, Duration, Utc};

use tabloid_core::domain::{CommentDraft, Post, PostDraft, UserProfileDraft, UserType};
use tabloid_core::policy::earliest_publish_date;
use tabloid_core::services::{
    CategoryService, CommentService, PostService, ReactionService, UserProfileService,
};
use tabloid_core::{DomainError, Viewer};
use tabloid_infra::Repositories;

struct World {
    repos: Repositories,
    users: UserProfileService,
    posts: PostService,
    reactions: ReactionService,
    categories: CategoryService,
    comments: CommentService,
    admin: Viewer,
    author_a: Viewer,
    author_b: Viewer,
    category_id: i32,
}

fn profile_draft(name: &str) -> UserProfileDraft {
    UserProfileDraft {
        display_name: name.to_string(),
        first_name: name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{name}@example.com"),
        image_location: None,
    }
}

async fn world() -> World {
    let repos = Repositories::in_memory();
    let users = UserProfileService::new(repos.users.clone());

    let admin = users.ensure_admin("ext-admin", profile_draft("admin")).await.unwrap();
    let author_a = users.register("ext-a", profile_draft("alice")).await.unwrap();
    let author_b = users.register("ext-b", profile_draft("bob")).await.unwrap();

    let categories = CategoryService::new(repos.categories.clone());
    let admin = Viewer::from(&admin);
    let category = categories.create(&admin, "News").await.unwrap();

    World {
        posts: PostService::new(
            repos.posts.clone(),
            repos.comments.clone(),
            repos.categories.clone(),
        ),
        reactions: ReactionService::new(repos.posts.clone()),
        comments: CommentService::new(repos.comments.clone(), repos.posts.clone()),
        categories,
        users,
        admin,
        author_a: Viewer::from(&author_a),
        author_b: Viewer::from(&author_b),
        category_id: category.id,
        repos,
    }
}

fn draft(category_id: i32, is_approved: bool, publish: DateTime<Utc>) -> PostDraft {
    PostDraft {
        id: None,
        category_id,
        title: "Hello".to_string(),
        content: "World".to_string(),
        image_location: None,
        publish_date_time: publish,
        is_approved,
    }
}

fn deactivated(viewer: Viewer) -> Viewer {
    Viewer {
        is_active: false,
        ..viewer
    }
}

#[tokio::test]
async fn unapproved_post_is_hidden_from_other_authors() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, false, Utc::now()))
        .await
        .unwrap();

    assert!(matches!(
        w.posts.get_by_id(&w.author_b, post.id).await,
        Err(DomainError::Forbidden)
    ));
    assert!(w.posts.get_by_id(&w.admin, post.id).await.is_ok());
    assert!(w.posts.get_by_id(&w.author_a, post.id).await.is_ok());
}

#[tokio::test]
async fn future_post_is_hidden_until_published() {
    let w = world().await;
    let post = w
        .posts
        .create(
            &w.author_a,
            draft(w.category_id, true, Utc::now() + Duration::days(1)),
        )
        .await
        .unwrap();

    assert!(matches!(
        w.posts.get_by_id(&w.author_b, post.id).await,
        Err(DomainError::Forbidden)
    ));
}

#[tokio::test]
async fn list_only_returns_visible_posts() {
    let w = world().await;
    let now = Utc::now();
    let public = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, now - Duration::hours(1)))
        .await
        .unwrap();
    w.posts
        .create(&w.author_a, draft(w.category_id, false, now))
        .await
        .unwrap();

    let seen_by_b = w.posts.list(&w.author_b).await.unwrap();
    assert_eq!(seen_by_b.len(), 1);
    assert_eq!(seen_by_b[0].id, public.id);

    assert_eq!(w.posts.list(&w.author_a).await.unwrap().len(), 2);
    assert_eq!(w.posts.list(&w.admin).await.unwrap().len(), 2);
    assert_eq!(
        w.posts
            .list_by_user(&w.author_b, w.author_a.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn get_by_id_includes_comments_and_reaction_counts() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();
    w.comments
        .add(
            &w.author_b,
            post.id,
            CommentDraft {
                subject: "Nice".to_string(),
                content: "Great read".to_string(),
            },
        )
        .await
        .unwrap();
    w.reactions.add_reaction(&w.author_b, post.id, 2).await.unwrap();

    let details = w.posts.get_by_id(&w.author_b, post.id).await.unwrap();
    assert_eq!(details.comments.len(), 1);
    assert_eq!(details.comments[0].user_profile_id, w.author_b.id);
    let love = details
        .reaction_counts
        .iter()
        .find(|c| c.reaction_type.id == 2)
        .unwrap();
    assert_eq!(love.count, 1);
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let w = world().await;
    assert!(matches!(
        w.posts.get_by_id(&w.admin, 404).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        w.posts.delete(&w.admin, 404).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn publish_date_lower_bound() {
    let w = world().await;
    let boundary = earliest_publish_date();

    assert!(
        w.posts
            .create(&w.author_a, draft(w.category_id, true, boundary))
            .await
            .is_ok()
    );
    assert!(matches!(
        w.posts
            .create(
                &w.author_a,
                draft(w.category_id, true, boundary - Duration::seconds(1))
            )
            .await,
        Err(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn publish_date_lower_bound_on_update() {
    let w = world().await;
    let boundary = earliest_publish_date();
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();

    let mut body = draft(w.category_id, true, boundary);
    body.id = Some(post.id);
    let updated = w.posts.update(&w.author_a, post.id, body).await.unwrap();
    assert_eq!(updated.publish_date_time, boundary);

    let mut body = draft(w.category_id, true, boundary - Duration::seconds(1));
    body.id = Some(post.id);
    assert!(matches!(
        w.posts.update(&w.author_a, post.id, body).await,
        Err(DomainError::Validation(_))
    ));

    let stored = w.posts.get_by_id(&w.author_a, post.id).await.unwrap();
    assert_eq!(stored.post.publish_date_time, boundary);
}

#[tokio::test]
async fn post_title_and_content_are_validated() {
    let w = world().await;

    let mut body = draft(w.category_id, true, Utc::now());
    body.title = "  ".to_string();
    assert!(matches!(
        w.posts.create(&w.author_a, body).await,
        Err(DomainError::Validation(_))
    ));

    let mut body = draft(w.category_id, true, Utc::now());
    body.title = "t".repeat(Post::TITLE_MAX_LEN + 1);
    assert!(matches!(
        w.posts.create(&w.author_a, body).await,
        Err(DomainError::Validation(_))
    ));

    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();
    let mut body = draft(w.category_id, true, Utc::now());
    body.id = Some(post.id);
    body.content = String::new();
    assert!(matches!(
        w.posts.update(&w.author_a, post.id, body).await,
        Err(DomainError::Validation(_))
    ));
    assert_eq!(w.posts.list(&w.admin).await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_rejects_id_mismatch_even_for_missing_post() {
    let w = world().await;
    let mut body = draft(w.category_id, true, Utc::now());
    body.id = Some(2);

    assert!(matches!(
        w.posts.update(&w.author_a, 999, body).await,
        Err(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn update_keeps_owner_and_creation_time() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, false, Utc::now()))
        .await
        .unwrap();

    let mut body = draft(w.category_id, true, Utc::now());
    body.id = Some(post.id);
    body.title = "Edited".to_string();
    let updated = w.posts.update(&w.admin, post.id, body).await.unwrap();

    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.user_profile_id, w.author_a.id);
    assert_eq!(updated.create_date_time, post.create_date_time);
}

#[tokio::test]
async fn only_owner_or_admin_mutates_posts() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();

    let mut body = draft(w.category_id, true, Utc::now());
    body.id = Some(post.id);
    assert!(matches!(
        w.posts.update(&w.author_b, post.id, body).await,
        Err(DomainError::Forbidden)
    ));
    assert!(matches!(
        w.posts.delete(&w.author_b, post.id).await,
        Err(DomainError::Forbidden)
    ));
    w.posts.delete(&w.author_a, post.id).await.unwrap();
}

#[tokio::test]
async fn deactivated_viewer_is_rejected_everywhere() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();
    let a = deactivated(w.author_a);
    let admin = deactivated(w.admin);

    assert!(matches!(w.posts.list(&a).await, Err(DomainError::Unauthenticated)));
    assert!(matches!(
        w.posts.get_by_id(&a, post.id).await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        w.posts.delete(&a, post.id).await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        w.reactions.add_reaction(&a, post.id, 1).await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        w.categories.create(&admin, "Other").await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        w.users.list_active(&admin).await,
        Err(DomainError::Unauthenticated)
    ));
}

#[tokio::test]
async fn duplicate_category_is_rejected() {
    let w = world().await;

    assert!(matches!(
        w.categories.create(&w.admin, "News").await,
        Err(DomainError::Duplicate(_))
    ));
    let sports = w.categories.create(&w.admin, "Sports").await.unwrap();
    assert!(matches!(
        w.categories.rename(&w.admin, sports.id, "News").await,
        Err(DomainError::Duplicate(_))
    ));
    assert!(matches!(
        w.categories.create(&w.author_a, "Opinion").await,
        Err(DomainError::Forbidden)
    ));
}

#[tokio::test]
async fn category_soft_delete_keeps_it_listed() {
    let w = world().await;
    let deactivated = w.categories.deactivate(&w.admin, w.category_id).await.unwrap();
    assert!(!deactivated.is_active);

    let all = w.posts.categories(&w.author_a).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].is_active);

    let reactivated = w.categories.activate(&w.admin, w.category_id).await.unwrap();
    assert!(reactivated.is_active);
}

#[tokio::test]
async fn reaction_is_recorded_for_the_viewer() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();

    let reaction = w.reactions.add_reaction(&w.author_b, post.id, 1).await.unwrap();
    assert_eq!(reaction.user_profile_id, w.author_b.id);
    assert_eq!(reaction.post_id, post.id);
}

#[tokio::test]
async fn reaction_on_missing_post_is_not_found() {
    let w = world().await;
    assert!(matches!(
        w.reactions.add_reaction(&w.author_b, 12345, 1).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        w.reactions.add_reaction(&w.author_b, 12345, 99).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn comments_follow_post_visibility_and_authorship() {
    let w = world().await;
    let hidden = w
        .posts
        .create(&w.author_a, draft(w.category_id, false, Utc::now()))
        .await
        .unwrap();
    let body = CommentDraft {
        subject: "Hi".to_string(),
        content: "There".to_string(),
    };

    assert!(matches!(
        w.comments.add(&w.author_b, hidden.id, body.clone()).await,
        Err(DomainError::Forbidden)
    ));

    let comment = w.comments.add(&w.author_a, hidden.id, body.clone()).await.unwrap();
    assert!(matches!(
        w.comments.update(&w.admin, comment.id, body.clone()).await,
        Err(DomainError::Forbidden)
    ));
    assert!(matches!(
        w.comments.delete(&w.author_b, comment.id).await,
        Err(DomainError::Forbidden)
    ));
    w.comments.delete(&w.admin, comment.id).await.unwrap();
    assert!(w.comments.list_for_post(&w.author_a, hidden.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_comment_is_invalid() {
    let w = world().await;
    let post = w
        .posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();

    let result = w
        .comments
        .add(
            &w.author_b,
            post.id,
            CommentDraft {
                subject: " ".to_string(),
                content: "Body".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn identity_resolution_and_user_activation() {
    let w = world().await;
    w.posts
        .create(&w.author_a, draft(w.category_id, true, Utc::now()))
        .await
        .unwrap();

    assert_eq!(w.users.resolve("ext-a").await.unwrap(), w.author_a);
    assert!(matches!(
        w.users.resolve("ext-unknown").await,
        Err(DomainError::Unauthenticated)
    ));

    w.users.deactivate(&w.admin, w.author_a.id).await.unwrap();
    assert!(matches!(
        w.users.resolve("ext-a").await,
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        w.users.get_by_external_id("ext-a").await,
        Err(DomainError::Unauthenticated)
    ));
    assert_eq!(w.users.list_inactive(&w.admin).await.unwrap().len(), 1);

    // Deactivation leaves the user's posts alone.
    assert_eq!(w.repos.posts.find_by_user_id(w.author_a.id).await.unwrap().len(), 1);

    w.users.activate(&w.admin, w.author_a.id).await.unwrap();
    assert!(w.users.resolve("ext-a").await.is_ok());
    assert!(matches!(
        w.users.deactivate(&w.author_b, w.author_a.id).await,
        Err(DomainError::Forbidden)
    ));
}

#[tokio::test]
async fn registering_twice_is_duplicate() {
    let w = world().await;
    assert!(matches!(
        w.users.register("ext-a", profile_draft("again")).await,
        Err(DomainError::Duplicate(_))
    ));

    let fresh = w.users.register("ext-new", profile_draft("carol")).await.unwrap();
    assert_eq!(fresh.user_type, UserType::Author);
    assert!(fresh.is_active);
}

#[tokio::test]
async fn registration_checks_profile_fields() {
    let w = world().await;

    let mut bad = profile_draft("dave");
    bad.first_name = "f".repeat(51);
    assert!(matches!(
        w.users.register("ext-dave", bad).await,
        Err(DomainError::Validation(_))
    ));

    assert!(matches!(
        w.users.register(&"x".repeat(29), profile_draft("erin")).await,
        Err(DomainError::Validation(_))
    ));
    assert!(
        w.users
            .register(&"x".repeat(28), profile_draft("erin"))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn ensure_admin_creates_once_and_promotes_existing() {
    let w = world().await;

    let again = w.users.ensure_admin("ext-admin", profile_draft("ignored")).await.unwrap();
    assert_eq!(again.id, w.admin.id);
    assert_eq!(again.display_name, "admin");

    w.users.deactivate(&w.admin, w.author_b.id).await.unwrap();
    let promoted = w.users.ensure_admin("ext-b", profile_draft("bob")).await.unwrap();
    assert_eq!(promoted.id, w.author_b.id);
    assert_eq!(promoted.user_type, UserType::Admin);
    assert!(promoted.is_active);

    let viewer = w.users.resolve("ext-b").await.unwrap();
    assert!(viewer.is_admin());
}
