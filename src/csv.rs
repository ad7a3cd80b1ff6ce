use serde::de::DeserializeOwned;

use crate::Error;

/// Loads a headed delimited file from disk into a list of rows.
/// Columns not present in `D` are ignored.
/// # Error
/// Errors if the file cannot be read, misses a column required by `D`
/// or has a value that does not parse into its column's type
pub fn load<D: DeserializeOwned>(path: &str, delimiter: u8) -> Result<Vec<D>, Error> {
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;

    deserialize(&data, delimiter).map_err(|e| Error::csv(path, e))
}

pub fn serialize(items: impl Iterator<Item = impl serde::Serialize>) -> Result<Vec<u8>, Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item).map_err(|e| Error::csv("<export>", e))?
    }
    wtr.into_inner()
        .map_err(|e| Error::csv("<export>", e.into_error().into()))
}

pub fn deserialize<D: DeserializeOwned>(data: &[u8], delimiter: u8) -> Result<Vec<D>, csv::Error> {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize().collect()
}
