pub mod prelude {
    use std::{
        cell::{Cell, RefCell},
        io,
    };

    pub use rove_core::{
        entities::*,
        gateways::image::*,
        pagination::PageRequest,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub const DEFAULT_PASSWORD: &str = "secret";

    pub fn registration(user_name: &str) -> usecases::Registration {
        usecases::Registration {
            user_name: user_name.into(),
            location: "Lisbon".into(),
            first_name: "Ana".into(),
            last_name: "Silva".into(),
            password: DEFAULT_PASSWORD.into(),
        }
    }

    pub fn post_content(title: &str) -> usecases::PostContent {
        usecases::PostContent {
            location: "Portugal".into(),
            title: title.into(),
            content: "Tiles, trams and pastries".into(),
        }
    }

    pub fn png_upload() -> ImageUpload {
        ImageUpload {
            format: ImageFormat::Png,
            data: vec![0x89, b'P', b'N', b'G'],
        }
    }

    /// Keeps track of stored picture names without touching the file system.
    #[derive(Default)]
    pub struct InMemoryImages {
        names: RefCell<Vec<String>>,
        counter: Cell<usize>,
    }

    impl InMemoryImages {
        pub fn names(&self) -> Vec<String> {
            self.names.borrow().clone()
        }

        pub fn count(&self) -> usize {
            self.names.borrow().len()
        }
    }

    impl ImageStorage for InMemoryImages {
        fn store_image(&self, image: &ImageUpload) -> io::Result<String> {
            let n = self.counter.get() + 1;
            self.counter.set(n);
            let name = format!("{n}.{}", image.format.file_extension());
            self.names.borrow_mut().push(name.clone());
            Ok(name)
        }

        fn remove_image(&self, name: &str) -> io::Result<()> {
            let mut names = self.names.borrow_mut();
            let Some(pos) = names.iter().position(|n| n == name) else {
                return Err(io::ErrorKind::NotFound.into());
            };
            names.remove(pos);
            Ok(())
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub images: InMemoryImages,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            rove_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                images: InMemoryImages::default(),
            }
        }

        pub fn register(&self, user_name: &str) -> AccountId {
            flows::register_account(&self.db_connections, registration(user_name)).unwrap()
        }

        pub fn create_post(&self, account_id: AccountId, title: &str) -> PostId {
            flows::create_post(
                &self.db_connections,
                &self.images,
                account_id,
                post_content(title),
                &png_upload(),
            )
            .unwrap()
        }

        pub fn try_get_account(&self, id: AccountId) -> Option<Account> {
            match self.db_connections.shared().unwrap().get_account(id) {
                Ok(account) => Some(account),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn try_get_post(&self, id: PostId) -> Option<Post> {
            match self.db_connections.shared().unwrap().get_post(id) {
                Ok(post) => Some(post),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn post(&self, id: PostId) -> Post {
            self.try_get_post(id).unwrap()
        }
    }
}
