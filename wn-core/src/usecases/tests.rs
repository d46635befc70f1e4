use std::{cell::RefCell, result};

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = result::Result<T, RepoError>;

trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Verification {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasId for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub places: RefCell<Vec<(Place, PlaceStatus)>>,
    pub verifications: RefCell<Vec<Verification>>,
    pub users: RefCell<Vec<User>>,
}

fn get<T: Clone + HasId>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + HasId>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + HasId>(objects: &mut Vec<T>, e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: &Place, status: PlaceStatus) -> RepoResult<()> {
        if self.places.borrow().iter().any(|(p, _)| p.id == place.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.places.borrow_mut().push((place.clone(), status));
        Ok(())
    }

    fn update_place(&self, place: &Place) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        if let Some(pos) = places.iter().position(|(p, _)| p.id == place.id) {
            places[pos].0 = place.clone();
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn delete_place(&self, id: &str) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        if let Some(pos) = places.iter().position(|(p, _)| p.id.as_str() == id) {
            places.remove(pos);
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn get_place(&self, id: &str) -> RepoResult<(Place, PlaceStatus)> {
        self.places
            .borrow()
            .iter()
            .find(|(p, _)| p.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_places(&self, pagination: &Pagination) -> RepoResult<Vec<(Place, PlaceStatus)>> {
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(self
            .places
            .borrow()
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count_places(&self) -> RepoResult<usize> {
        Ok(self.places.borrow().len())
    }

    fn places_within_radius(
        &self,
        center: MapPoint,
        radius: Distance,
    ) -> RepoResult<Vec<(Place, PlaceStatus)>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|(p, _)| p.pos.distance(&center).as_meters() <= radius.as_meters())
            .cloned()
            .collect())
    }

    fn update_place_status(&self, id: &str, status: PlaceStatus) -> RepoResult<usize> {
        let mut places = self.places.borrow_mut();
        if let Some(pos) = places.iter().position(|(p, _)| p.id.as_str() == id) {
            places[pos].1 = status;
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

impl VerificationRepo for MockDb {
    fn create_verification(&self, verification: &Verification) -> RepoResult<()> {
        create(&mut self.verifications.borrow_mut(), verification.clone())
    }

    fn update_verification(&self, verification: &Verification) -> RepoResult<()> {
        update(&mut self.verifications.borrow_mut(), verification)
    }

    fn get_verification(&self, id: &str) -> RepoResult<Verification> {
        get(&self.verifications.borrow(), id)
    }

    fn all_verifications(&self) -> RepoResult<Vec<Verification>> {
        Ok(self.verifications.borrow().clone())
    }

    fn verifications_of_place(&self, place_id: &str) -> RepoResult<Vec<Verification>> {
        Ok(self
            .verifications
            .borrow()
            .iter()
            .filter(|v| v.place_id.as_str() == place_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.email == user.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }

    fn delete_user_by_email(&self, email: &EmailAddress) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if let Some(pos) = users.iter().position(|u| &u.email == email) {
            users.remove(pos);
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user_by_id(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}
