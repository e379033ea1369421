use crate::utils::error::{EtlError, Result};
use calamine::{Data, DataType as _, Reader, Xlsx};
use chrono::{NaiveDateTime, NaiveTime};
use polars::prelude::{Column, CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use std::collections::HashMap;
use std::io::Cursor;

/// Encoding of a downloaded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Csv,
    Xlsx,
}

pub fn read_payload(format: PayloadFormat, bytes: &[u8]) -> Result<DataFrame> {
    match format {
        PayloadFormat::Csv => read_csv(bytes),
        PayloadFormat::Xlsx => read_xlsx(bytes),
    }
}

/// 解析帶標題列的 CSV，欄位型別交給 polars 推斷
pub fn read_csv(bytes: &[u8]) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()?;
    Ok(frame)
}

/// 讀取活頁簿第一個工作表，第一列為標題
pub fn read_xlsx(bytes: &[u8]) -> Result<DataFrame> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| EtlError::spreadsheet(e.to_string()))?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| EtlError::spreadsheet("workbook has no worksheets"))?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| EtlError::spreadsheet(format!("sheet '{}': {}", first_sheet, e)))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(DataFrame::empty()),
    };

    let names = unique_names(
        header
            .iter()
            .enumerate()
            .map(|(idx, cell)| match cell_text(cell) {
                Some(name) => name.trim().to_string(),
                None => format!("__UNNAMED__{}", idx),
            })
            .collect(),
    );

    let body: Vec<&[Data]> = rows.collect();
    let columns = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<Option<&Data>> = body.iter().map(|row| row.get(idx)).collect();
            sheet_column(name, &cells)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

pub fn write_csv(frame: &mut DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(frame)?;
    Ok(buffer)
}

/// 一欄的儲存格轉成 polars 欄位：全為整數、全為數字、全為布林，否則為字串
fn sheet_column(name: String, cells: &[Option<&Data>]) -> Column {
    let present: Vec<&Data> = cells
        .iter()
        .flatten()
        .copied()
        .filter(|cell| cell_text(cell).is_some())
        .collect();

    if !present.is_empty() && present.iter().all(|cell| matches!(cell, Data::Int(_))) {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|cell| match cell {
                Some(Data::Int(i)) => Some(*i),
                _ => None,
            })
            .collect();
        return Column::new(name.into(), values);
    }

    if !present.is_empty()
        && present
            .iter()
            .all(|cell| matches!(cell, Data::Int(_) | Data::Float(_)))
    {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| match cell {
                Some(Data::Float(f)) => Some(*f),
                Some(Data::Int(i)) => Some(*i as f64),
                _ => None,
            })
            .collect();
        return Column::new(name.into(), values);
    }

    if !present.is_empty() && present.iter().all(|cell| matches!(cell, Data::Bool(_))) {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|cell| match cell {
                Some(Data::Bool(b)) => Some(*b),
                _ => None,
            })
            .collect();
        return Column::new(name.into(), values);
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|cell| cell.and_then(cell_text))
        .collect();
    Column::new(name.into(), values)
}

// 空白與錯誤儲存格視為 null
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format!("{:?}", f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(match cell.as_datetime() {
            Some(dt) => format_datetime(dt),
            None => cell.to_string(),
        }),
        Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) | Data::Empty => None,
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name
            } else {
                format!("{}_duplicated_{}", name, *count - 1)
            };
            *count += 1;
            unique
        })
        .collect()
}
