//! Roster repository: read-only list queries for musicians, bands and
//! instruments.
//!
//! Every query selects an explicit column whitelist into a row struct, so
//! join-table columns and timestamps never leave the database layer.
//! Pagination always applies to the top-level collection. Nested
//! collections are loaded by a second query keyed on the page's ids.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Statement,
};

use super::base::PaginateQuery;
use super::entities::{
    band, instrument, musician, musician_instrument, BandEntity, InstrumentEntity, MusicianEntity,
    MusicianInstrumentEntity,
};
use crate::domain::{
    BandSummary, BandWithMusicians, InstrumentWithMusicians, MusicianSummary, MusicianWithBand,
};
use crate::errors::AppResult;
use crate::types::Pagination;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Roster repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Check storage connectivity
    async fn ping(&self) -> AppResult<()>;

    /// Musicians ordered by last name then first name, each with their band
    async fn list_musicians(&self, pagination: Pagination) -> AppResult<Vec<MusicianWithBand>>;

    /// Bands ordered by name, each with members ordered by last name
    async fn list_bands(&self, pagination: Pagination) -> AppResult<Vec<BandWithMusicians>>;

    /// Instruments ordered by type, each with players ordered by band name
    /// then last name
    async fn list_instruments(
        &self,
        pagination: Pagination,
    ) -> AppResult<Vec<InstrumentWithMusicians>>;
}

/// SeaORM-backed roster repository
pub struct RosterStore {
    db: DatabaseConnection,
}

impl RosterStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct MusicianRow {
    id: i32,
    first_name: String,
    last_name: String,
    band_id: Option<i32>,
    band_name: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct BandRow {
    id: i32,
    name: String,
}

#[derive(Debug, FromQueryResult)]
struct MemberRow {
    band_id: i32,
    id: i32,
    first_name: String,
    last_name: String,
}

#[derive(Debug, FromQueryResult)]
struct InstrumentRow {
    id: i32,
    instrument_type: String,
}

#[derive(Debug, FromQueryResult)]
struct PlayerRow {
    instrument_id: i32,
    id: i32,
    first_name: String,
    last_name: String,
    band_id: Option<i32>,
    band_name: Option<String>,
}

impl From<MusicianRow> for MusicianWithBand {
    fn from(row: MusicianRow) -> Self {
        let band = match (row.band_id, row.band_name) {
            (Some(id), Some(name)) => Some(BandSummary { id, name }),
            _ => None,
        };

        MusicianWithBand {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            band,
        }
    }
}

impl From<PlayerRow> for MusicianWithBand {
    fn from(row: PlayerRow) -> Self {
        MusicianWithBand::from(MusicianRow {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            band_id: row.band_id,
            band_name: row.band_name,
        })
    }
}

impl From<MemberRow> for MusicianSummary {
    fn from(row: MemberRow) -> Self {
        MusicianSummary {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}

#[async_trait]
impl RosterRepository for RosterStore {
    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    async fn list_musicians(&self, pagination: Pagination) -> AppResult<Vec<MusicianWithBand>> {
        let rows = MusicianEntity::find()
            .select_only()
            .column_as(musician::Column::Id, "id")
            .column_as(musician::Column::FirstName, "first_name")
            .column_as(musician::Column::LastName, "last_name")
            .column_as(band::Column::Id, "band_id")
            .column_as(band::Column::Name, "band_name")
            .join(JoinType::LeftJoin, musician::Relation::Band.def())
            .order_by_asc(musician::Column::LastName)
            .order_by_asc(musician::Column::FirstName)
            .order_by_asc(musician::Column::Id)
            .page_window(pagination)
            .into_model::<MusicianRow>()
            .all(&self.db)
            .await?;

        tracing::debug!(count = rows.len(), "Loaded musicians");

        Ok(rows.into_iter().map(MusicianWithBand::from).collect())
    }

    async fn list_bands(&self, pagination: Pagination) -> AppResult<Vec<BandWithMusicians>> {
        let bands = BandEntity::find()
            .select_only()
            .column_as(band::Column::Id, "id")
            .column_as(band::Column::Name, "name")
            .order_by_asc(band::Column::Name)
            .order_by_asc(band::Column::Id)
            .page_window(pagination)
            .into_model::<BandRow>()
            .all(&self.db)
            .await?;

        if bands.is_empty() {
            return Ok(Vec::new());
        }

        let band_ids: Vec<i32> = bands.iter().map(|b| b.id).collect();
        let members = MusicianEntity::find()
            .select_only()
            .column_as(musician::Column::BandId, "band_id")
            .column_as(musician::Column::Id, "id")
            .column_as(musician::Column::FirstName, "first_name")
            .column_as(musician::Column::LastName, "last_name")
            .filter(musician::Column::BandId.is_in(band_ids))
            .order_by_asc(musician::Column::LastName)
            .order_by_asc(musician::Column::Id)
            .into_model::<MemberRow>()
            .all(&self.db)
            .await?;

        tracing::debug!(bands = bands.len(), members = members.len(), "Loaded bands");

        // Rows arrive in member order, so pushing keeps each band's list sorted.
        let mut by_band: HashMap<i32, Vec<MusicianSummary>> = HashMap::new();
        for member in members {
            by_band
                .entry(member.band_id)
                .or_default()
                .push(MusicianSummary::from(member));
        }

        Ok(bands
            .into_iter()
            .map(|band| BandWithMusicians {
                musicians: by_band.remove(&band.id).unwrap_or_default(),
                id: band.id,
                name: band.name,
            })
            .collect())
    }

    async fn list_instruments(
        &self,
        pagination: Pagination,
    ) -> AppResult<Vec<InstrumentWithMusicians>> {
        let instruments = InstrumentEntity::find()
            .select_only()
            .column_as(instrument::Column::Id, "id")
            .column_as(instrument::Column::InstrumentType, "instrument_type")
            .order_by_asc(instrument::Column::InstrumentType)
            .order_by_asc(instrument::Column::Id)
            .page_window(pagination)
            .into_model::<InstrumentRow>()
            .all(&self.db)
            .await?;

        if instruments.is_empty() {
            return Ok(Vec::new());
        }

        let instrument_ids: Vec<i32> = instruments.iter().map(|i| i.id).collect();
        let players = MusicianInstrumentEntity::find()
            .select_only()
            .column_as(musician_instrument::Column::InstrumentId, "instrument_id")
            .column_as(musician::Column::Id, "id")
            .column_as(musician::Column::FirstName, "first_name")
            .column_as(musician::Column::LastName, "last_name")
            .column_as(band::Column::Id, "band_id")
            .column_as(band::Column::Name, "band_name")
            .join(JoinType::InnerJoin, musician_instrument::Relation::Musician.def())
            .join(JoinType::LeftJoin, musician::Relation::Band.def())
            .filter(musician_instrument::Column::InstrumentId.is_in(instrument_ids))
            .order_by_asc(band::Column::Name)
            .order_by_asc(musician::Column::LastName)
            .order_by_asc(musician::Column::Id)
            .into_model::<PlayerRow>()
            .all(&self.db)
            .await?;

        tracing::debug!(
            instruments = instruments.len(),
            players = players.len(),
            "Loaded instruments"
        );

        let mut by_instrument: HashMap<i32, Vec<MusicianWithBand>> = HashMap::new();
        for player in players {
            by_instrument
                .entry(player.instrument_id)
                .or_default()
                .push(MusicianWithBand::from(player));
        }

        Ok(instruments
            .into_iter()
            .map(|instrument| {
                let mut musicians = by_instrument.remove(&instrument.id).unwrap_or_default();
                // Backends disagree on where NULL band names sort. Move band-less
                // players first with a stable sort; the rest keep the database
                // collation order.
                musicians.sort_by_key(|m| m.band.is_some());

                InstrumentWithMusicians {
                    id: instrument.id,
                    instrument_type: instrument.instrument_type,
                    musicians,
                }
            })
            .collect())
    }
}
