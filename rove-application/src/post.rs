use super::*;

/// Stores the picture first and creates the post afterwards.
///
/// The picture is removed again if the post could not be created.
pub fn create_post(
    connections: &sqlite::Connections,
    images: &dyn ImageStorage,
    account_id: AccountId,
    content: usecases::PostContent,
    upload: &ImageUpload,
) -> Result<PostId> {
    let image = images.store_image(upload)?;
    let created = run_in_transaction(connections, |conn| {
        usecases::create_post(conn, account_id, content, image.clone())
    });
    match created {
        Ok(post_id) => Ok(post_id),
        Err(err) => {
            warn!("Failed to create post of account {account_id}: {err}");
            remove_image_file(images, &image);
            Err(err)
        }
    }
}

/// Updates the post and optionally replaces its picture.
///
/// A new picture is stored before the transaction is committed,
/// the replaced picture is only removed after a successful commit.
pub fn update_post(
    connections: &sqlite::Connections,
    images: &dyn ImageStorage,
    account_id: AccountId,
    post_id: PostId,
    content: usecases::PostContent,
    upload: Option<&ImageUpload>,
) -> Result<()> {
    let new_image = upload.map(|img| images.store_image(img)).transpose()?;
    let updated = run_in_transaction(connections, |conn| {
        usecases::update_post(conn, account_id, post_id, content, new_image.clone())
    });
    match updated {
        Ok(replaced_image) => {
            if let Some(name) = replaced_image {
                remove_image_file(images, &name);
            }
            Ok(())
        }
        Err(err) => {
            warn!("Failed to update post {post_id}: {err}");
            if let Some(name) = new_image {
                remove_image_file(images, &name);
            }
            Err(err)
        }
    }
}

pub fn delete_post(
    connections: &sqlite::Connections,
    images: &dyn ImageStorage,
    account_id: AccountId,
    post_id: PostId,
) -> Result<()> {
    let image = run_in_transaction(connections, |conn| {
        usecases::delete_post(conn, account_id, post_id).inspect_err(|err| {
            warn!("Failed to delete post {post_id}: {err}");
        })
    })?;
    remove_image_file(images, &image);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_post_with_picture() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let post_id = fixture.create_post(ana, "Lisbon");
        let post = fixture.post(post_id);
        assert_eq!(post.title, "Lisbon");
        assert_eq!(fixture.images.names(), vec![post.image]);
    }

    #[test]
    fn remove_picture_if_post_could_not_be_created() {
        let fixture = BackendFixture::new();
        let err = flows::create_post(
            &fixture.db_connections,
            &fixture.images,
            AccountId::new(42),
            post_content("Nowhere"),
            &png_upload(),
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fixture.images.count(), 0);
    }

    #[test]
    fn replace_picture() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let post_id = fixture.create_post(ana, "Lisbon");
        let old_image = fixture.post(post_id).image;

        flows::update_post(
            &fixture.db_connections,
            &fixture.images,
            ana,
            post_id,
            post_content("Lisboa"),
            Some(&png_upload()),
        )
        .unwrap();

        let post = fixture.post(post_id);
        assert_eq!(post.title, "Lisboa");
        assert_ne!(post.image, old_image);
        assert_eq!(fixture.images.names(), vec![post.image]);
    }

    #[test]
    fn keep_picture_without_upload() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let post_id = fixture.create_post(ana, "Lisbon");
        let old_image = fixture.post(post_id).image;

        flows::update_post(
            &fixture.db_connections,
            &fixture.images,
            ana,
            post_id,
            post_content("Lisboa"),
            None,
        )
        .unwrap();

        assert_eq!(fixture.post(post_id).image, old_image);
        assert_eq!(fixture.images.names(), vec![old_image]);
    }

    #[test]
    fn only_the_owner_may_update_or_delete() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let bob = fixture.register("bob");
        let post_id = fixture.create_post(ana, "Lisbon");
        let before = fixture.post(post_id);

        let err = flows::update_post(
            &fixture.db_connections,
            &fixture.images,
            bob,
            post_id,
            post_content("Hacked"),
            Some(&png_upload()),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Business(usecases::Error::Forbidden)));

        let err = flows::delete_post(&fixture.db_connections, &fixture.images, bob, post_id)
            .unwrap_err();
        assert!(matches!(err, AppError::Business(usecases::Error::Forbidden)));

        assert_eq!(fixture.post(post_id), before);
        assert_eq!(fixture.images.names(), vec![before.image]);
    }

    #[test]
    fn delete_post_with_picture() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let post_id = fixture.create_post(ana, "Lisbon");
        flows::delete_post(&fixture.db_connections, &fixture.images, ana, post_id).unwrap();
        assert!(fixture.try_get_post(post_id).is_none());
        assert_eq!(fixture.images.count(), 0);
    }
}
