/// Fuel-type codes of the vehicle table and their category in the emissions table
const FUEL_TYPES: [(i64, &str); 6] = [
    (1, "X"), // gasoline
    (2, "Z"), // diesel
    (3, "E"), // ethanol
    (4, "D"),
    (5, "N"), // natural gas
    (6, "B"),
];

/// Returns the emissions-table category of the fuel-type `code`, or `None`
/// when the code is unknown, in which case the vehicle matches no emissions row.
pub fn fuel_type(code: i64) -> Option<&'static str> {
    FUEL_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, category)| *category)
}
