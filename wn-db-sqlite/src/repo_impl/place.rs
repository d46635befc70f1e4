use super::*;

impl<'a> PlaceRepo for DbReadOnly<'a> {
    fn create_place(&self, _place: &Place, _status: PlaceStatus) -> Result<()> {
        unreachable!();
    }
    fn update_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }
    fn delete_place(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn update_place_status(&self, _id: &str, _status: PlaceStatus) -> Result<usize> {
        unreachable!();
    }

    fn get_place(&self, id: &str) -> Result<(Place, PlaceStatus)> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self, pagination: &Pagination) -> Result<Vec<(Place, PlaceStatus)>> {
        all_places(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
    fn places_within_radius(
        &self,
        center: MapPoint,
        radius: Distance,
    ) -> Result<Vec<(Place, PlaceStatus)>> {
        places_within_radius(&mut self.conn.borrow_mut(), center, radius)
    }
}

impl<'a> PlaceRepo for DbReadWrite<'a> {
    fn create_place(&self, place: &Place, status: PlaceStatus) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place, status)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }
    fn delete_place(&self, id: &str) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }
    fn update_place_status(&self, id: &str, status: PlaceStatus) -> Result<usize> {
        update_place_status(&mut self.conn.borrow_mut(), id, status)
    }

    fn get_place(&self, id: &str) -> Result<(Place, PlaceStatus)> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self, pagination: &Pagination) -> Result<Vec<(Place, PlaceStatus)>> {
        all_places(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
    fn places_within_radius(
        &self,
        center: MapPoint,
        radius: Distance,
    ) -> Result<Vec<(Place, PlaceStatus)>> {
        places_within_radius(&mut self.conn.borrow_mut(), center, radius)
    }
}

impl<'a> PlaceRepo for DbConnection<'a> {
    fn create_place(&self, place: &Place, status: PlaceStatus) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place, status)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }
    fn delete_place(&self, id: &str) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }
    fn update_place_status(&self, id: &str, status: PlaceStatus) -> Result<usize> {
        update_place_status(&mut self.conn.borrow_mut(), id, status)
    }

    fn get_place(&self, id: &str) -> Result<(Place, PlaceStatus)> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self, pagination: &Pagination) -> Result<Vec<(Place, PlaceStatus)>> {
        all_places(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
    fn places_within_radius(
        &self,
        center: MapPoint,
        radius: Distance,
    ) -> Result<Vec<(Place, PlaceStatus)>> {
        places_within_radius(&mut self.conn.borrow_mut(), center, radius)
    }
}

fn load_place(entity: models::PlaceEntity) -> Result<(Place, PlaceStatus)> {
    let status = PlaceStatus::try_from(entity.current_status)
        .map_err(|err| RepoError::Other(err.into()))?;
    Ok((entity.into(), status))
}

fn create_place(conn: &mut SqliteConnection, place: &Place, status: PlaceStatus) -> Result<()> {
    use schema::places::dsl;
    let new_place = models::NewPlace::from(place);
    diesel::insert_into(schema::places::table)
        .values((
            &new_place,
            dsl::current_status.eq(PlaceStatusPrimitive::from(status)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::places::dsl;
    let new_place = models::NewPlace::from(place);
    let count = diesel::update(dsl::places.filter(dsl::id.eq(new_place.id)))
        .set(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete_place(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::places::dsl;
    let count = diesel::delete(dsl::places.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn update_place_status(
    conn: &mut SqliteConnection,
    id: &str,
    status: PlaceStatus,
) -> Result<usize> {
    use schema::places::dsl;
    let count = diesel::update(dsl::places.filter(dsl::id.eq(id)))
        .set(dsl::current_status.eq(PlaceStatusPrimitive::from(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(count)
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<(Place, PlaceStatus)> {
    use schema::places::dsl;
    let entity = dsl::places
        .filter(dsl::id.eq(id))
        .first::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    load_place(entity)
}

fn all_places(
    conn: &mut SqliteConnection,
    pagination: &Pagination,
) -> Result<Vec<(Place, PlaceStatus)>> {
    use schema::places::dsl;
    let mut query = dsl::places.order_by(dsl::created_at.desc()).into_boxed();
    let limit = pagination.limit.map(|limit| limit as i64);
    let offset = pagination.offset.map(|offset| offset as i64).unwrap_or(0);
    if offset > 0 {
        // SQLite accepts OFFSET only together with LIMIT
        query = query.limit(limit.unwrap_or(i64::MAX)).offset(offset);
    } else if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_place)
        .collect()
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::places::dsl;
    Ok(dsl::places
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn places_within_radius(
    conn: &mut SqliteConnection,
    center: MapPoint,
    radius: Distance,
) -> Result<Vec<(Place, PlaceStatus)>> {
    use schema::places::dsl;
    const METERS_PER_DEG: f64 = 111_320.0;
    // Prefilter with a bounding box in SQL, then refine with the
    // great-circle distance.
    let lat_delta_deg = radius.as_meters() / METERS_PER_DEG;
    let cos_lat = center.lat_deg().to_radians().cos().max(0.01);
    let lng_delta_deg = radius.as_meters() / (METERS_PER_DEG * cos_lat);
    let entities = dsl::places
        .filter(dsl::lat.between(
            center.lat_deg() - lat_delta_deg,
            center.lat_deg() + lat_delta_deg,
        ))
        .filter(dsl::lng.between(
            center.lng_deg() - lng_delta_deg,
            center.lng_deg() + lng_delta_deg,
        ))
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut places = Vec::with_capacity(entities.len());
    for entity in entities {
        let (place, status) = load_place(entity)?;
        if place.pos.distance(&center).as_meters() <= radius.as_meters() {
            places.push((place, status));
        }
    }
    Ok(places)
}
