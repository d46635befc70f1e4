// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamps in **milli**seconds.

use wn_core::entities as e;

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub display_name: &'a str,
    pub password: &'a str,
    pub role: i16,
    pub created_at: i64,
}

impl<'a> From<&'a e::User> for NewUser<'a> {
    fn from(from: &'a e::User) -> Self {
        Self {
            id: from.id.as_str(),
            email: from.email.as_str(),
            display_name: &from.display_name,
            password: from.password.as_ref(),
            role: e::RolePrimitive::from(from.role),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password: String,
    pub role: i16,
    pub created_at: i64,
}

impl From<UserEntity> for e::User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            email,
            display_name,
            password,
            role,
            created_at,
            ..
        } = from;
        Self {
            id: id.into(),
            email: e::EmailAddress::new_unchecked(email),
            display_name,
            password: e::Password::from_hash(password),
            role: e::Role::try_from(role).unwrap_or_default(),
            created_at: e::Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places, treat_none_as_null = true)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: Option<&'a str>,
    pub title: &'a str,
    pub description: &'a str,
    pub address: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub wifi_available: bool,
    pub power_outlets: bool,
    pub laptop_friendly: bool,
    pub noise_level: Option<i16>,
    pub opening_hours: Option<&'a str>,
}

impl<'a> From<&'a e::Place> for NewPlace<'a> {
    fn from(from: &'a e::Place) -> Self {
        use num_traits::ToPrimitive as _;
        Self {
            id: from.id.as_str(),
            created_at: from.created_at.as_millis(),
            created_by: from.submitter.as_ref().map(e::Id::as_str),
            title: &from.title,
            description: &from.description,
            address: &from.address,
            lat: from.pos.lat_deg(),
            lng: from.pos.lng_deg(),
            wifi_available: from.amenities.wifi_available,
            power_outlets: from.amenities.power_outlets,
            laptop_friendly: from.amenities.laptop_friendly,
            noise_level: from
                .amenities
                .noise_level
                .and_then(|level| level.to_i16()),
            opening_hours: from.opening_hours.as_deref(),
        }
    }
}

#[derive(Queryable)]
pub struct PlaceEntity {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub title: String,
    pub description: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub wifi_available: bool,
    pub power_outlets: bool,
    pub laptop_friendly: bool,
    pub noise_level: Option<i16>,
    pub opening_hours: Option<String>,
    pub current_status: i16,
}

impl From<PlaceEntity> for e::Place {
    fn from(from: PlaceEntity) -> Self {
        use num_traits::FromPrimitive as _;
        let PlaceEntity {
            id,
            created_at,
            created_by,
            title,
            description,
            address,
            lat,
            lng,
            wifi_available,
            power_outlets,
            laptop_friendly,
            noise_level,
            opening_hours,
            ..
        } = from;
        Self {
            id: id.into(),
            created_at: e::Timestamp::from_millis(created_at),
            submitter: created_by.map(Into::into),
            title,
            description,
            address,
            pos: e::MapPoint::from_lat_lng_deg(lat, lng),
            amenities: e::Amenities {
                wifi_available,
                power_outlets,
                laptop_friendly,
                noise_level: noise_level.and_then(e::NoiseLevel::from_i16),
            },
            opening_hours,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = place_verifications, treat_none_as_null = true)]
pub struct NewPlaceVerification<'a> {
    pub id: &'a str,
    pub place_id: &'a str,
    pub user_id: &'a str,
    pub proof_link: &'a str,
    pub admin_notes: Option<&'a str>,
    pub status: i16,
    pub created_at: i64,
}

impl<'a> From<&'a e::Verification> for NewPlaceVerification<'a> {
    fn from(from: &'a e::Verification) -> Self {
        Self {
            id: from.id.as_str(),
            place_id: from.place_id.as_str(),
            user_id: from.submitter_id.as_str(),
            proof_link: &from.proof_link,
            admin_notes: from.admin_notes.as_deref(),
            status: e::PlaceStatusPrimitive::from(from.status),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct PlaceVerificationEntity {
    pub rowid: i64,
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub proof_link: String,
    pub admin_notes: Option<String>,
    pub status: i16,
    pub created_at: i64,
}
