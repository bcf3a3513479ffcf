use super::*;

pub fn create_lodging(connections: &sqlite::Connections, lodging: NewLodging) -> Result<LodgingId> {
    run_in_transaction(connections, |conn| usecases::create_lodging(conn, lodging))
}

pub fn add_lodging_visit(
    connections: &sqlite::Connections,
    account_id: AccountId,
    visit: NewLodgingVisit,
) -> Result<LodgingVisitId> {
    run_in_transaction(connections, |conn| {
        usecases::add_lodging_visit(conn, account_id, visit)
    })
}
