//! Owned-asset listing: houses and vehicles with their storage.

use ucp_domain::{map_assets, Property, RawRecord};

use crate::app::App;
use crate::infrastructure::ports::SourceError;

/// Fetch and map every property the player owns.
///
/// Optional tables (`houses`, `playervehicles`) are not provisioned on
/// every deployment; a missing table means "no assets of that kind", while
/// any other source failure propagates.
pub async fn list_properties(app: &App, player_id: i64) -> Result<Vec<Property>, SourceError> {
    let player = app
        .records
        .player_by_id(player_id)
        .await?
        .ok_or(SourceError::NotFound)?;

    // houses.OwnerID may reference either players.ID or players.Name.
    let id = player.int("ID");
    let name = player.text("Name");

    let houses = optional_table(app.records.houses_by_owner(id, &name).await)?;
    let vehicles = optional_table(app.records.vehicles_by_player(id).await)?;

    Ok(map_assets(&houses, &vehicles, &app.catalogs))
}

fn optional_table(
    result: Result<Vec<RawRecord>, SourceError>,
) -> Result<Vec<RawRecord>, SourceError> {
    match result {
        Err(SourceError::TableMissing) => Ok(Vec::new()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{app_with, player, StubSource, TableFixture};
    use serde_json::json;
    use ucp_domain::PropertyKind;

    #[tokio::test]
    async fn test_missing_tables_mean_no_assets() {
        let mut source = StubSource::default();
        source.players.push(player(1, "Carl_Johnson", "pw"));
        source.houses = TableFixture::Missing;
        source.vehicles = TableFixture::Missing;
        let app = app_with(source);
        let properties = list_properties(&app, 1).await.expect("missing tables are fine");
        assert!(properties.is_empty());
    }

    #[tokio::test]
    async fn test_other_source_failures_propagate() {
        let mut source = StubSource::default();
        source.players.push(player(1, "Carl_Johnson", "pw"));
        source.houses = TableFixture::Broken;
        let app = app_with(source);
        let err = list_properties(&app, 1).await.expect_err("broken table");
        assert!(matches!(err, SourceError::Database(_)));
    }

    #[tokio::test]
    async fn test_maps_houses_and_vehicles() {
        let mut source = StubSource::default();
        source.players.push(player(1, "Carl_Johnson", "pw"));

        let mut house = RawRecord::new();
        house.insert("HouseID", json!(3));
        house.insert("Value", json!(450_000));
        source.houses = TableFixture::Rows(vec![house]);

        let mut vehicle = RawRecord::new();
        vehicle.insert("ID", json!(12));
        vehicle.insert("model", json!(411));
        source.vehicles = TableFixture::Rows(vec![vehicle]);

        let app = app_with(source);
        let properties = list_properties(&app, 1).await.expect("assets map");
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].kind, PropertyKind::House);
        assert_eq!(properties[1].name, "Infernus");
    }

    #[tokio::test]
    async fn test_unknown_player_is_not_found() {
        let app = app_with(StubSource::default());
        let err = list_properties(&app, 42).await.expect_err("unknown player");
        assert!(matches!(err, SourceError::NotFound));
    }
}
