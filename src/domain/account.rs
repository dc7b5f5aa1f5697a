// src/domain/account.rs

use crate::bcpao::models::{AccountDetail, Building};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One appraiser account, flattened and normalized from the nested account response.
/// Building-derived aggregates are `None` when no building contributed a value,
/// so "no data" stays distinguishable from a literal zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub account: u64,
    pub site_address: String,
    pub parcel_id: String,
    pub acreage: f64,
    pub zoning: String,
    pub owners: String,

    pub sale_date: Option<NaiveDate>,
    pub sale_price: Option<f64>,
    pub assessed_value: Option<f64>,

    pub num_buildings: u32,
    pub base_area: Option<i64>,
    pub sub_area: Option<i64>,
    pub year_built: Option<i32>,
    pub exterior_wall: Option<String>,
    pub frame: Option<String>,
    pub roof: Option<String>,
    pub roof_structure: Option<String>,
    pub has_pool: bool,
    pub has_fireplace: bool,
}

impl AccountInfo {
    /// Builds an `AccountInfo` from the raw account response.
    /// Fails only when the account number or a present sale date can't be read.
    pub fn from_account_detail(detail: &AccountDetail) -> Result<Self, String> {
        let account = detail.account.to_u64()?;

        let latest_sale = detail.sales_history.as_ref().and_then(|s| s.first());
        let sale_date = latest_sale
            .and_then(|s| s.sale_date.as_deref())
            .map(parse_sale_date)
            .transpose()?;
        let sale_price = latest_sale.and_then(|s| s.sale_price);

        let assessed_value = detail
            .value_summary
            .as_ref()
            .and_then(|v| v.first())
            .and_then(|v| v.market_val);

        let mut summary = BuildingSummary::default();
        for building in detail.buildings.iter().flatten() {
            summary.add(building);
        }
        tracing::debug!(
            account,
            buildings = summary.num_buildings,
            "aggregated building records"
        );

        Ok(AccountInfo {
            account,
            site_address: detail.site_address.clone(),
            parcel_id: detail.parcel_id.clone(),
            acreage: detail.acreage,
            zoning: detail.property_use.label(),
            owners: detail.owner.clone(),
            sale_date,
            sale_price,
            assessed_value,
            num_buildings: summary.num_buildings,
            base_area: summary.base_area,
            sub_area: summary.sub_area,
            year_built: summary.average_year_built(),
            exterior_wall: join_slot(&summary.exterior_wall),
            frame: join_slot(&summary.frame),
            roof: join_slot(&summary.roof),
            roof_structure: join_slot(&summary.roof_structure),
            has_pool: summary.has_pool,
            has_fireplace: summary.has_fireplace,
        })
    }
}

/// The four construction attributes we keep. Any other code is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionSlot {
    ExteriorWall,
    Frame,
    Roof,
    RoofStructure,
}

impl ConstructionSlot {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EXTERIOR WALL" => Some(ConstructionSlot::ExteriorWall),
            "FRAME" => Some(ConstructionSlot::Frame),
            "ROOF" => Some(ConstructionSlot::Roof),
            "ROOF STRUCTURE" => Some(ConstructionSlot::RoofStructure),
            _ => None,
        }
    }
}

/// Running totals while folding over an account's buildings.
#[derive(Debug, Default)]
struct BuildingSummary {
    num_buildings: u32,
    base_area: Option<i64>,
    sub_area: Option<i64>,
    years_built: Vec<i32>,
    exterior_wall: Vec<String>,
    frame: Vec<String>,
    roof: Vec<String>,
    roof_structure: Vec<String>,
    has_pool: bool,
    has_fireplace: bool,
}

impl BuildingSummary {
    fn add(&mut self, building: &Building) {
        self.num_buildings += 1;

        // A zero area is treated the same as a missing one.
        if let Some(area) = building.total_base_area.filter(|a| *a != 0) {
            self.base_area = Some(self.base_area.unwrap_or(0).saturating_add(area));
        }
        if let Some(area) = building.total_sub_area.filter(|a| *a != 0) {
            self.sub_area = Some(self.sub_area.unwrap_or(0).saturating_add(area));
        }
        if let Some(year) = building.year_built {
            self.years_built.push(year);
        }

        for ci in building.construction_info.iter().flatten() {
            let (Some(code), Some(description)) = (ci.code.as_deref(), ci.description.as_deref())
            else {
                continue;
            };
            let bucket = match ConstructionSlot::from_code(code) {
                Some(ConstructionSlot::ExteriorWall) => &mut self.exterior_wall,
                Some(ConstructionSlot::Frame) => &mut self.frame,
                Some(ConstructionSlot::Roof) => &mut self.roof,
                Some(ConstructionSlot::RoofStructure) => &mut self.roof_structure,
                None => continue,
            };
            bucket.push(description.to_string());
        }

        // First match wins: a description naming both a pool and a fireplace
        // only sets the pool flag.
        for feature in building.extra_feature_info.iter().flatten() {
            let Some(description) = feature.description.as_deref() else {
                continue;
            };
            if description.contains("POOL") {
                self.has_pool = true;
            } else if description.contains("FIREPLACE") {
                self.has_fireplace = true;
            }
        }
    }

    /// Floor of the mean year across buildings that reported one.
    fn average_year_built(&self) -> Option<i32> {
        if self.years_built.is_empty() {
            return None;
        }
        let total: i64 = self.years_built.iter().map(|y| i64::from(*y)).sum();
        let mean = total.div_euclid(self.years_built.len() as i64);
        i32::try_from(mean).ok()
    }
}

fn join_slot(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join("/"))
    }
}

/// Sale dates come back as naive ISO timestamps ("2019-05-10T00:00:00"),
/// occasionally with an offset or as a bare date.
fn parse_sale_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("unparseable sale date '{raw}': {e}"))
}
