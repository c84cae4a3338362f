// ═══════════════════════════════════════════════════════════════════
// Error Tests — LoadError / CoreError variants, Display, From impls
// ═══════════════════════════════════════════════════════════════════

use sales_dashboard_core::errors::{CoreError, LoadError};

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn file_io() {
        let err = LoadError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn csv() {
        let err = LoadError::Csv("unequal lengths".into());
        assert_eq!(err.to_string(), "CSV parse error: unequal lengths");
    }

    #[test]
    fn missing_column() {
        let err = LoadError::MissingColumn("Producto".into());
        assert_eq!(err.to_string(), "Missing required column: Producto");
    }

    #[test]
    fn invalid_field() {
        let err = LoadError::InvalidField {
            line: 4,
            column: "Mes".into(),
            value: "13".into(),
        };
        assert_eq!(err.to_string(), "Invalid value \"13\" in column Mes at line 4");
    }

    #[test]
    fn load_is_transparent() {
        let err = CoreError::from(LoadError::MissingColumn("Año".into()));
        assert_eq!(err.to_string(), "Missing required column: Año");
    }

    #[test]
    fn no_dataset() {
        assert_eq!(
            CoreError::NoDataset.to_string(),
            "No dataset loaded — upload a CSV file first"
        );
    }

    #[test]
    fn invalid_settings() {
        let err = CoreError::InvalidSettings("bad label".into());
        assert_eq!(err.to_string(), "Invalid settings: bad label");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("oops".into());
        assert_eq!(err.to_string(), "Serialization error: oops");
    }
}

// ── User-facing message ─────────────────────────────────────────────

#[test]
fn user_message_prefixes_detail() {
    let err = LoadError::MissingColumn("Sucursal".into());
    assert_eq!(
        err.user_message(),
        "Error al cargar los datos: Missing required column: Sucursal"
    );
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: LoadError = io.into();
        assert!(matches!(err, LoadError::FileIO(ref m) if m.contains("no such file")));
    }

    #[test]
    fn from_csv_error_is_csv_variant() {
        let data = "a,b\n1,2,3\n";
        let mut reader = csv::ReaderBuilder::new().from_reader(data.as_bytes());
        let csv_err = reader
            .records()
            .find_map(Result::err)
            .expect("ragged row should fail");
        let err: LoadError = csv_err.into();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn load_error_into_core_error() {
        let err: CoreError = LoadError::Csv("x".into()).into();
        assert!(matches!(err, CoreError::Load(LoadError::Csv(_))));
    }
}
