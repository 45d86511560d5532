use common::models::AcceptedCoin;
use common::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;
use tracing::info;

/// Fixed column order of the output workbook.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Symbol",
    "Market Cap (USD)",
    "24h Volume (USD)",
    "Price (USD)",
    "Tier 1 Exchanges",
    "Tier 2 Exchanges",
];

/// Write the accepted coins to `path`, one row per coin under a bold
/// header row. An empty accepted set still produces a valid header-only
/// workbook. An existing file at `path` is overwritten.
pub fn write_workbook(path: &Path, coins: &[AcceptedCoin]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (col, title) in COLUMNS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *title, &header)
            .map_err(export_err)?;
    }

    for (i, coin) in coins.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write(row, 0, coin.name.as_str()).map_err(export_err)?;
        sheet
            .write(row, 1, coin.symbol.as_str())
            .map_err(export_err)?;
        sheet
            .write(row, 2, coin.market_cap_usd)
            .map_err(export_err)?;
        sheet.write(row, 3, coin.volume_24h).map_err(export_err)?;
        sheet.write(row, 4, coin.price_usd).map_err(export_err)?;
        sheet.write(row, 5, coin.tier1_count).map_err(export_err)?;
        sheet.write(row, 6, coin.tier2_count).map_err(export_err)?;
    }

    workbook.save(path).map_err(export_err)?;
    info!("Saved {} coins to {}", coins.len(), path.display());

    Ok(())
}

fn export_err(err: XlsxError) -> Error {
    Error::ExportError(err.to_string())
}
