//! Document loader.
//!
//! Opens a spreadsheet container from a filesystem path or a byte stream,
//! detects the format by content inspection (zip vs CFB magic, never file
//! extension), and decodes every sheet into the in-memory
//! [`Document`]/[`Sheet`] model. Password-protected containers are decrypted
//! in memory before re-entering the decoder.
//!
//! The two source forms are intentionally asymmetric: the path form
//! pre-checks existence and reports a missing file as `Ok(None)`, while the
//! stream form has no pre-check and reports every failure as an error.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime};

use rowcast_core::{CellValue, Document, Error, Result, Sheet};

/// Options for opening a document.
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    password: Option<String>,
    readonly: bool,
}

impl OpenOptions {
    /// Create options with no password, `readonly = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password used to decrypt a protected container.
    pub fn password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = Some(password.into());
        self
    }

    /// When set, write-back-oriented structures (formula text alongside
    /// cached results) are not retained. Values returned by the
    /// accessors for non-formula cells are unaffected.
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }
}

/// Open a document from a filesystem path.
///
/// Returns `Ok(None)` when the path does not reference an existing file;
/// this is an explicit pre-check, not an error. All other failures
/// (unsupported content, wrong or missing password) are errors.
pub fn open_path<P: AsRef<Path>>(path: P, options: &OpenOptions) -> Result<Option<Document>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path)?;
    log::debug!("opening {} ({} bytes)", path.display(), bytes.len());
    open_bytes(bytes, options).map(Some)
}

/// Open a document from a byte stream.
///
/// No existence pre-check is possible on a stream: malformed content and
/// wrong/missing passwords all surface as errors.
pub fn open_stream<R: Read>(mut reader: R, options: &OpenOptions) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    open_bytes(bytes, options)
}

fn open_bytes(bytes: Vec<u8>, options: &OpenOptions) -> Result<Document> {
    match decode(Cursor::new(bytes.as_slice()), options.readonly) {
        Ok(doc) => Ok(doc),
        Err(err) => {
            if !is_encrypted_container(&bytes) {
                return Err(err);
            }
            let Some(password) = options.password.as_deref() else {
                return Err(Error::EncryptedDocument("password required".into()));
            };
            log::debug!("encrypted container detected, decrypting in memory");
            let decrypted = office_crypto::decrypt_from_bytes(bytes, password)
                .map_err(|e| Error::EncryptedDocument(format!("{e:?}")))?;
            decode(Cursor::new(decrypted.as_slice()), options.readonly)
        }
    }
}

/// Check for a CFB container carrying the OOXML encryption streams.
///
/// A plain XLS is also a CFB container, so the stream names decide:
/// encrypted workbooks hold `EncryptionInfo`/`EncryptedPackage` instead of
/// a `Workbook` stream.
fn is_encrypted_container(bytes: &[u8]) -> bool {
    match cfb::CompoundFile::open(Cursor::new(bytes)) {
        Ok(cfb) => cfb.exists("/EncryptionInfo") || cfb.exists("/EncryptedPackage"),
        Err(_) => false,
    }
}

fn decode<RS: Read + Seek + Clone>(source: RS, readonly: bool) -> Result<Document> {
    let mut workbook = calamine::open_workbook_auto_from_rs(source).map_err(map_decoder_error)?;

    let mut document = Document::empty();
    for name in workbook.sheet_names().to_owned() {
        let range = workbook.worksheet_range(&name).map_err(map_decoder_error)?;

        let mut sheet = Sheet::new(&name);
        let (row_start, col_start) = range.start().unwrap_or((0, 0));
        for (row, col, data) in range.used_cells() {
            let value = convert(data);
            sheet.set_value(row_start + row as u32, col_start + col as u32, value);
        }

        if !readonly {
            attach_formulas(&mut workbook, &name, &mut sheet);
        }

        log::debug!("decoded sheet '{}' with {} rows", name, sheet.row_count());
        document.add_sheet(sheet);
    }
    Ok(document)
}

/// Re-tag cells that carry a formula as `Formula { text, cached }`.
///
/// Skipped entirely under `readonly`; the cached plain value is then all a
/// formula cell retains.
fn attach_formulas<RS: Read + Seek>(workbook: &mut Sheets<RS>, name: &str, sheet: &mut Sheet) {
    let formulas = match workbook.worksheet_formula(name) {
        Ok(f) => f,
        Err(e) => {
            log::warn!("formula pass failed for sheet '{name}': {e}");
            return;
        }
    };

    let (row_start, col_start) = formulas.start().unwrap_or((0, 0));
    for (row, col, text) in formulas.used_cells() {
        if text.is_empty() {
            continue;
        }
        let (row, col) = (row_start + row as u32, col_start + col as u32);
        let cached = sheet
            .row(row)
            .and_then(|r| r.cell(col))
            .cloned()
            .unwrap_or(CellValue::Empty);
        let text = if text.starts_with('=') {
            text.clone()
        } else {
            format!("={text}")
        };
        sheet.set_value(row, col, CellValue::formula(text, cached));
    }
}

fn map_decoder_error(err: calamine::Error) -> Error {
    match err {
        calamine::Error::Io(e) => Error::Io(e),
        calamine::Error::Msg(m) => Error::UnsupportedFormat(m.to_string()),
        calamine::Error::Xls(calamine::XlsError::Password)
        | calamine::Error::Xlsx(calamine::XlsxError::Password) => {
            Error::EncryptedDocument("password required".into())
        }
        other => Error::Decode(other.to_string()),
    }
}

/// Convert one decoder cell into the closed tag set.
///
/// Kinds outside the set fold into `Text` holding their canonical literal:
/// error cells keep the `#DIV/0!`-style string, ISO durations keep their
/// duration string.
fn convert(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Numeric(*f),
        Data::Int(i) => CellValue::Numeric(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(d) => CellValue::Date(d),
            None => CellValue::Numeric(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_iso_datetime(s) {
            Some(d) => CellValue::Date(d),
            None => CellValue::Text(s.clone()),
        },
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
