
pub mod prelude {

    use std::cell::RefCell;

    pub use wn_core::{
        entities::*,
        gateways::{notify::*, revalidate::*},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use wn_db_sqlite::Connections;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct DummyNotifyGW;

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, _: NotificationEvent) {}
    }

    #[derive(Default)]
    pub struct RecordingRevalidationGW {
        pub stale: RefCell<Vec<StaleView>>,
    }

    impl RevalidationGateway for RecordingRevalidationGW {
        fn views_changed(&self, views: &[StaleView]) {
            self.stale.borrow_mut().extend_from_slice(views);
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
        pub revalidate: RecordingRevalidationGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            wn_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                notify: DummyNotifyGW,
                revalidate: RecordingRevalidationGW::default(),
            }
        }

        pub fn create_user(&self, email: &str, role: Option<Role>) -> User {
            let user = {
                let db = self.db_connections.exclusive().unwrap();
                usecases::create_new_user(
                    &db,
                    usecases::NewUser {
                        email: EmailAddress::new_unchecked(email.into()),
                        display_name: "Test User".into(),
                        password: "secret1".into(),
                    },
                )
                .unwrap()
            };
            if let Some(role) = role {
                let user = User { role, ..user };
                let db = self.db_connections.exclusive().unwrap();
                db.update_user(&user).unwrap();
                user
            } else {
                user
            }
        }

        pub fn create_place(&self, title: &str, submitter: Option<&User>) -> (Place, PlaceStatus) {
            flows::create_place(
                &self.db_connections,
                &self.notify,
                &self.revalidate,
                submitter.map(|user| &user.email),
                usecases::NewPlace {
                    title: title.into(),
                    description: "".into(),
                    address: "Jl. Braga 1, Bandung".into(),
                    lat: -6.9175,
                    lng: 107.6191,
                    amenities: Amenities::default(),
                    opening_hours: None,
                    status: None,
                },
            )
            .unwrap()
        }

        pub fn submit_verification(
            &self,
            account: &User,
            place_id: &str,
            proof_link: &str,
        ) -> super::super::Result<Verification> {
            flows::submit_verification(
                &self.db_connections,
                &self.notify,
                &self.revalidate,
                &account.email,
                usecases::NewVerification {
                    place_id: place_id.into(),
                    proof_link: proof_link.into(),
                    admin_notes: None,
                },
            )
        }

        pub fn moderate(
            &self,
            account_email: &EmailAddress,
            verification_id: &str,
            decision: usecases::Decision,
        ) -> super::super::Result<Verification> {
            flows::moderate_verification(
                &self.db_connections,
                &self.notify,
                &self.revalidate,
                account_email,
                verification_id,
                usecases::Moderation {
                    decision,
                    admin_notes: None,
                },
            )
        }

        pub fn get_place(&self, id: &str) -> (Place, PlaceStatus) {
            self.db_connections.shared().unwrap().get_place(id).unwrap()
        }

        pub fn get_verification(&self, id: &str) -> Verification {
            self.db_connections
                .shared()
                .unwrap()
                .get_verification(id)
                .unwrap()
        }
    }
}
