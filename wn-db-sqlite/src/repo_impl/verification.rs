use super::*;

impl<'a> VerificationRepo for DbReadOnly<'a> {
    fn create_verification(&self, _verification: &Verification) -> Result<()> {
        unreachable!();
    }
    fn update_verification(&self, _verification: &Verification) -> Result<()> {
        unreachable!();
    }

    fn get_verification(&self, id: &str) -> Result<Verification> {
        get_verification(&mut self.conn.borrow_mut(), id)
    }
    fn all_verifications(&self) -> Result<Vec<Verification>> {
        all_verifications(&mut self.conn.borrow_mut())
    }
    fn verifications_of_place(&self, place_id: &str) -> Result<Vec<Verification>> {
        verifications_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> VerificationRepo for DbReadWrite<'a> {
    fn create_verification(&self, verification: &Verification) -> Result<()> {
        create_verification(&mut self.conn.borrow_mut(), verification)
    }
    fn update_verification(&self, verification: &Verification) -> Result<()> {
        update_verification(&mut self.conn.borrow_mut(), verification)
    }

    fn get_verification(&self, id: &str) -> Result<Verification> {
        get_verification(&mut self.conn.borrow_mut(), id)
    }
    fn all_verifications(&self) -> Result<Vec<Verification>> {
        all_verifications(&mut self.conn.borrow_mut())
    }
    fn verifications_of_place(&self, place_id: &str) -> Result<Vec<Verification>> {
        verifications_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> VerificationRepo for DbConnection<'a> {
    fn create_verification(&self, verification: &Verification) -> Result<()> {
        create_verification(&mut self.conn.borrow_mut(), verification)
    }
    fn update_verification(&self, verification: &Verification) -> Result<()> {
        update_verification(&mut self.conn.borrow_mut(), verification)
    }

    fn get_verification(&self, id: &str) -> Result<Verification> {
        get_verification(&mut self.conn.borrow_mut(), id)
    }
    fn all_verifications(&self) -> Result<Vec<Verification>> {
        all_verifications(&mut self.conn.borrow_mut())
    }
    fn verifications_of_place(&self, place_id: &str) -> Result<Vec<Verification>> {
        verifications_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

fn load_verification(entity: models::PlaceVerificationEntity) -> Result<Verification> {
    let status =
        PlaceStatus::try_from(entity.status).map_err(|err| RepoError::Other(err.into()))?;
    let models::PlaceVerificationEntity {
        id,
        place_id,
        user_id,
        proof_link,
        admin_notes,
        created_at,
        ..
    } = entity;
    Ok(Verification {
        id: id.into(),
        place_id: place_id.into(),
        submitter_id: user_id.into(),
        proof_link,
        admin_notes,
        status,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_verification(conn: &mut SqliteConnection, v: &Verification) -> Result<()> {
    let new_verification = models::NewPlaceVerification::from(v);
    diesel::insert_into(schema::place_verifications::table)
        .values(&new_verification)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_verification(conn: &mut SqliteConnection, v: &Verification) -> Result<()> {
    use schema::place_verifications::dsl;
    let new_verification = models::NewPlaceVerification::from(v);
    let count = diesel::update(dsl::place_verifications.filter(dsl::id.eq(new_verification.id)))
        .set(&new_verification)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn get_verification(conn: &mut SqliteConnection, id: &str) -> Result<Verification> {
    use schema::place_verifications::dsl;
    let entity = dsl::place_verifications
        .filter(dsl::id.eq(id))
        .first::<models::PlaceVerificationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_verification(entity)
}

fn all_verifications(conn: &mut SqliteConnection) -> Result<Vec<Verification>> {
    use schema::place_verifications::dsl;
    dsl::place_verifications
        .order_by(dsl::created_at.desc())
        .load::<models::PlaceVerificationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_verification)
        .collect()
}

fn verifications_of_place(
    conn: &mut SqliteConnection,
    place_id: &str,
) -> Result<Vec<Verification>> {
    use schema::place_verifications::dsl;
    dsl::place_verifications
        .filter(dsl::place_id.eq(place_id))
        .order_by(dsl::created_at.desc())
        .load::<models::PlaceVerificationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_verification)
        .collect()
}
