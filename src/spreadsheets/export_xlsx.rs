use crate::domain::AccountInfo;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {what}: {source}")]
    Write {
        what: &'static str,
        #[source]
        source: XlsxError,
    },
    #[error("Failed to save workbook: {0}")]
    Save(#[source] XlsxError),
}

const HEADERS: [&str; 19] = [
    "Account",
    "Site Address",
    "Parcel ID",
    "Acreage",
    "Zoning",
    "Owners",
    "Sale Date",
    "Sale Price",
    "Assessed Value",
    "Buildings",
    "Base Area",
    "Sub Area",
    "Year Built",
    "Exterior Wall",
    "Frame",
    "Roof",
    "Roof Structure",
    "Pool",
    "Fireplace",
];

pub fn export_accounts_xlsx(accounts: &[AccountInfo]) -> Result<Vec<u8>, ExportError> {
    build_workbook(accounts)?
        .save_to_buffer()
        .map_err(ExportError::Save)
}

pub fn write_accounts_xlsx(accounts: &[AccountInfo], path: &Path) -> Result<(), ExportError> {
    build_workbook(accounts)?
        .save(path)
        .map_err(ExportError::Save)
}

fn build_workbook(accounts: &[AccountInfo]) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| write_err("header", e))?;
    }

    for (i, info) in accounts.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, info)?;
    }

    Ok(workbook)
}

fn write_row(ws: &mut Worksheet, r: u32, info: &AccountInfo) -> Result<(), ExportError> {
    ws.write_number(r, 0, info.account as f64)
        .map_err(|e| write_err("account", e))?;
    ws.write_string(r, 1, &info.site_address)
        .map_err(|e| write_err("site address", e))?;
    ws.write_string(r, 2, &info.parcel_id)
        .map_err(|e| write_err("parcel id", e))?;
    ws.write_number(r, 3, info.acreage)
        .map_err(|e| write_err("acreage", e))?;
    ws.write_string(r, 4, &info.zoning)
        .map_err(|e| write_err("zoning", e))?;
    ws.write_string(r, 5, &info.owners)
        .map_err(|e| write_err("owners", e))?;

    if let Some(date) = info.sale_date {
        ws.write_string(r, 6, date.format("%Y-%m-%d").to_string())
            .map_err(|e| write_err("sale date", e))?;
    }
    write_opt_number(ws, r, 7, info.sale_price, "sale price")?;
    write_opt_number(ws, r, 8, info.assessed_value, "assessed value")?;

    ws.write_number(r, 9, f64::from(info.num_buildings))
        .map_err(|e| write_err("building count", e))?;
    write_opt_number(ws, r, 10, info.base_area.map(|a| a as f64), "base area")?;
    write_opt_number(ws, r, 11, info.sub_area.map(|a| a as f64), "sub area")?;
    write_opt_number(ws, r, 12, info.year_built.map(f64::from), "year built")?;

    let descriptions = [
        (13, &info.exterior_wall, "exterior wall"),
        (14, &info.frame, "frame"),
        (15, &info.roof, "roof"),
        (16, &info.roof_structure, "roof structure"),
    ];
    for (col, value, what) in descriptions {
        if let Some(value) = value {
            ws.write_string(r, col, value)
                .map_err(|e| write_err(what, e))?;
        }
    }

    ws.write_string(r, 17, yes_no(info.has_pool))
        .map_err(|e| write_err("pool", e))?;
    ws.write_string(r, 18, yes_no(info.has_fireplace))
        .map_err(|e| write_err("fireplace", e))?;

    Ok(())
}

fn write_opt_number(
    ws: &mut Worksheet,
    r: u32,
    col: u16,
    value: Option<f64>,
    what: &'static str,
) -> Result<(), ExportError> {
    if let Some(value) = value {
        ws.write_number(r, col, value)
            .map_err(|e| write_err(what, e))?;
    }
    Ok(())
}

fn write_err(what: &'static str, source: XlsxError) -> ExportError {
    ExportError::Write { what, source }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
