use super::*;

impl From<models::Lodging> for Lodging {
    fn from(from: models::Lodging) -> Self {
        let models::Lodging { id, name, location } = from;
        Self {
            id: id.into(),
            name,
            location,
        }
    }
}

impl TryFrom<models::LodgingVisit> for LodgingVisit {
    type Error = repo::Error;
    fn try_from(from: models::LodgingVisit) -> Result<Self> {
        let models::LodgingVisit {
            id,
            post_id,
            lodging_id,
            cost,
            rating,
            comment,
        } = from;
        let cost = u32::try_from(cost)
            .map_err(|_| anyhow!("Invalid cost {cost} of lodging visit {id}"))?;
        let rating = u8::try_from(rating)
            .map_err(|_| anyhow!("Invalid rating {rating} of lodging visit {id}"))?;
        Ok(Self {
            id: id.into(),
            post_id: post_id.into(),
            lodging_id: lodging_id.into(),
            cost,
            rating,
            comment,
        })
    }
}

impl_repo! {
    LodgingRepo {
        write {
            fn create_lodging(&self, lodging: &NewLodging) -> Result<LodgingId>;
            fn create_lodging_visit(&self, visit: &NewLodgingVisit) -> Result<LodgingVisitId>;
        }
        read {
            fn get_lodging(&self, id: LodgingId) -> Result<Lodging>;
            fn all_lodgings(&self, page: &PageRequest) -> Result<Page<Lodging>>;
            fn try_get_visit_of_post(&self, post_id: PostId) -> Result<Option<LodgingVisit>>;
            fn visits_of_lodging(&self, lodging_id: LodgingId, page: &PageRequest) -> Result<Page<LodgingVisit>>;
        }
    }
}

fn create_lodging(conn: &mut SqliteConnection, lodging: &NewLodging) -> Result<LodgingId> {
    let new_lodging = models::NewLodging {
        name: &lodging.name,
        location: &lodging.location,
    };
    diesel::insert_into(schema::lodging::table)
        .values(&new_lodging)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn create_lodging_visit(
    conn: &mut SqliteConnection,
    visit: &NewLodgingVisit,
) -> Result<LodgingVisitId> {
    let cost = i32::try_from(visit.cost)
        .map_err(|_| anyhow!("The cost {} is out of range", visit.cost))?;
    let new_visit = models::NewLodgingVisit {
        post_id: visit.post_id.to_inner(),
        lodging_id: visit.lodging_id.to_inner(),
        cost,
        rating: visit.rating.into(),
        comment: &visit.comment,
    };
    diesel::insert_into(schema::lodging_visit::table)
        .values(&new_visit)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn get_lodging(conn: &mut SqliteConnection, id: LodgingId) -> Result<Lodging> {
    use schema::lodging::dsl;
    Ok(dsl::lodging
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::Lodging>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_lodgings(conn: &mut SqliteConnection, page: &PageRequest) -> Result<Page<Lodging>> {
    use schema::lodging::dsl;
    let total = dsl::lodging
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::lodging
        .order_by((dsl::name.asc(), dsl::id.asc()))
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Lodging>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn try_get_visit_of_post(
    conn: &mut SqliteConnection,
    post_id: PostId,
) -> Result<Option<LodgingVisit>> {
    use schema::lodging_visit::dsl;
    dsl::lodging_visit
        .filter(dsl::post_id.eq(post_id.to_inner()))
        .first::<models::LodgingVisit>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn visits_of_lodging(
    conn: &mut SqliteConnection,
    lodging_id: LodgingId,
    page: &PageRequest,
) -> Result<Page<LodgingVisit>> {
    use schema::lodging_visit::dsl;
    let lodging_id = lodging_id.to_inner();
    let total = dsl::lodging_visit
        .filter(dsl::lodging_id.eq(lodging_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let items = dsl::lodging_visit
        .filter(dsl::lodging_id.eq(lodging_id))
        .order_by(dsl::id.desc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::LodgingVisit>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>>>()?;
    Ok(Page::new(*page, items, to_count(total)))
}
