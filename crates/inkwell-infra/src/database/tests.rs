#[cfg(test)]
mod tests {
    use crate::database::entity::blog;
    use crate::database::postgres_repo::PostgresBlogRepository;
    use inkwell_core::domain::BlogPost;
    use inkwell_core::error::RepoError;
    use inkwell_core::ports::{BaseRepository, BlogRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn blog_model(id: uuid::Uuid, title: &str, image: Option<&str>) -> blog::Model {
        blog::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            created_at: chrono::Utc::now().into(),
            image: image.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let blog_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog_model(
                blog_id,
                "Test Blog",
                Some("https://example.com/a.png"),
            )]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(blog_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Blog");
        assert_eq!(post.id, blog_id);
        assert_eq!(
            post.image.map(|i| i.into_inner()),
            Some("https://example.com/a.png".to_owned())
        );
    }

    #[tokio::test]
    async fn test_find_all_blogs() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                blog_model(uuid::Uuid::new_v4(), "One", None),
                blog_model(uuid::Uuid::new_v4(), "Two", None),
            ]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "One");
        assert!(posts[0].image.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result =
            BaseRepository::<BlogPost, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
