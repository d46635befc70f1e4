pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, user_builder::*, verification_builder::*};

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = desc.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.place.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn submitter(mut self, submitter: Option<Id>) -> Self {
            self.place.submitter = submitter;
            self
        }
        pub fn amenities(mut self, amenities: Amenities) -> Self {
            self.place.amenities = amenities;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    submitter: None,
                    title: "".into(),
                    description: "".into(),
                    address: "".into(),
                    pos: MapPoint::default(),
                    amenities: Amenities::default(),
                    opening_hours: None,
                },
            }
        }
    }
}

pub mod verification_builder {

    use super::*;
    use crate::{id::*, time::*, verification::*};

    #[derive(Debug)]
    pub struct VerificationBuild {
        verification: Verification,
    }

    impl VerificationBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.verification.id = id.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.verification.place_id = place_id.into();
            self
        }
        pub fn submitter_id(mut self, submitter_id: &str) -> Self {
            self.verification.submitter_id = submitter_id.into();
            self
        }
        pub fn proof_link(mut self, proof_link: &str) -> Self {
            self.verification.proof_link = proof_link.into();
            self
        }
        pub fn status(mut self, status: PlaceStatus) -> Self {
            self.verification.status = status;
            self
        }
        pub fn finish(self) -> Verification {
            self.verification
        }
    }

    impl Builder for Verification {
        type Build = VerificationBuild;
        fn build() -> Self::Build {
            VerificationBuild {
                verification: Verification {
                    id: Id::new(),
                    place_id: Id::new(),
                    submitter_id: Id::new(),
                    proof_link: "https://proof.example/".into(),
                    admin_notes: None,
                    status: PlaceStatus::Pending,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn display_name(mut self, display_name: &str) -> Self {
            self.user.display_name = display_name.into();
            self
        }
        pub fn password(mut self, plain_text: &str) -> Self {
            self.user.password = plain_text.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    display_name: "".into(),
                    password: Password::from_hash("".into()),
                    role: Role::default(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
