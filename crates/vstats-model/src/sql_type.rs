//! Classification of SQL column type names.
//!
//! Attribute tables report column types as free-form SQL type names
//! (`INTEGER`, `DOUBLE PRECISION`, `TEXT`, ...). Only the names listed here
//! count as numeric; everything else, including types with a precision
//! suffix such as `NUMERIC(10,2)`, is treated as non-numeric.

/// Integral SQL type names, uppercase.
pub const SQL_INT_TYPES: &[&str] = &[
    "INT",
    "INTEGER",
    "TINYINT",
    "SMALLINT",
    "MEDIUMINT",
    "BIGINT",
    "UNSIGNED BIG INT",
    "INT2",
    "INT8",
];

/// Floating point SQL type names, uppercase.
pub const SQL_FLOAT_TYPES: &[&str] = &[
    "REAL",
    "DOUBLE",
    "DOUBLE PRECISION",
    "FLOAT",
    "FLOATING POINT",
];

/// Returns true for known integral SQL type names (case-insensitive).
pub fn is_integer(sql_type: &str) -> bool {
    SQL_INT_TYPES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(sql_type))
}

/// Returns true for known floating point SQL type names (case-insensitive).
pub fn is_floating(sql_type: &str) -> bool {
    SQL_FLOAT_TYPES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(sql_type))
}

/// Returns true if the SQL type name is a known integral or floating point type.
pub fn is_numeric(sql_type: &str) -> bool {
    is_integer(sql_type) || is_floating(sql_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_integer_types() {
        for name in SQL_INT_TYPES {
            assert!(is_numeric(name), "{name}");
            assert!(is_integer(name), "{name}");
            assert!(!is_floating(name), "{name}");
        }
    }

    #[test]
    fn recognizes_floating_types() {
        for name in SQL_FLOAT_TYPES {
            assert!(is_numeric(name), "{name}");
            assert!(is_floating(name), "{name}");
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert!(is_numeric("integer"));
        assert!(is_numeric("Double Precision"));
        assert!(is_numeric("unsigned big int"));
    }

    #[test]
    fn other_types_are_not_numeric() {
        for name in ["TEXT", "VARCHAR", "CHARACTER", "DATE", "NUMERIC(10,2)", "", " INTEGER"] {
            assert!(!is_numeric(name), "{name:?}");
        }
    }
}
