use sales_dashboard_core::errors::CoreError;
use sales_dashboard_core::models::filter::{BranchFilter, FilteredView};
use sales_dashboard_core::models::record::{Dataset, SalesRecord, YearMonth, REQUIRED_COLUMNS};
use sales_dashboard_core::models::settings::{DashboardSettings, EmployeeProfile};
use sales_dashboard_core::models::trend::TrendLine;

fn ym(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

fn record(branch: &str, product: &str, y: i32, m: u32, units: f64) -> SalesRecord {
    SalesRecord {
        branch: branch.into(),
        product: product.into(),
        period: ym(y, m),
        units_sold: Some(units),
        revenue: Some(units * 10.0),
        cost: Some(units * 6.0),
    }
}

fn dataset(records: Vec<SalesRecord>) -> Dataset {
    Dataset {
        columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        records,
        coerced_cells: 0,
    }
}

// ═══════════════════════════════════════════════════════════════════
//  YearMonth
// ═══════════════════════════════════════════════════════════════════

mod year_month {
    use super::*;

    #[test]
    fn valid_months() {
        for m in 1..=12 {
            assert_eq!(ym(2024, m).month(), m);
        }
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ym(2023, 1).to_string(), "2023-01");
        assert_eq!(ym(2023, 11).to_string(), "2023-11");
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(ym(2022, 12) < ym(2023, 1));
        assert!(ym(2023, 2) > ym(2023, 1));
    }

    #[test]
    fn days_since_uses_calendar_days() {
        let jan = ym(2023, 1);
        assert_eq!(jan.days_since(jan), 0);
        assert_eq!(ym(2023, 2).days_since(jan), 31);
        assert_eq!(ym(2023, 3).days_since(jan), 59);
        assert_eq!(ym(2024, 1).days_since(jan), 365);
    }

    #[test]
    fn first_day() {
        let d = ym(2023, 7).first_day();
        assert_eq!(d.to_string(), "2023-07-01");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Dataset
// ═══════════════════════════════════════════════════════════════════

mod dataset_model {
    use super::*;

    #[test]
    fn branches_are_distinct_and_sorted() {
        let ds = dataset(vec![
            record("Norte", "X", 2023, 1, 1.0),
            record("Centro", "X", 2023, 1, 1.0),
            record("Norte", "Y", 2023, 1, 1.0),
            record("Sur", "X", 2023, 1, 1.0),
        ]);
        assert_eq!(ds.branches(), vec!["Centro", "Norte", "Sur"]);
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(ds.branches().is_empty());
    }

    #[test]
    fn has_branch() {
        let ds = dataset(vec![record("A", "X", 2023, 1, 1.0)]);
        assert!(ds.has_branch("A"));
        assert!(!ds.has_branch("B"));
    }

    #[test]
    fn record_year_and_month_accessors() {
        let r = record("A", "X", 2021, 6, 1.0);
        assert_eq!(r.year(), 2021);
        assert_eq!(r.month(), 6);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  BranchFilter & FilteredView
// ═══════════════════════════════════════════════════════════════════

mod branch_filter {
    use super::*;

    #[test]
    fn default_is_all() {
        assert_eq!(BranchFilter::default(), BranchFilter::All);
    }

    #[test]
    fn labels() {
        assert_eq!(BranchFilter::All.label("Todas"), "Todas");
        assert_eq!(BranchFilter::Branch("Norte".into()).label("Todas"), "Norte");
    }

    #[test]
    fn from_label() {
        assert_eq!(BranchFilter::from_label("Todas", "Todas"), BranchFilter::All);
        assert_eq!(
            BranchFilter::from_label("Norte", "Todas"),
            BranchFilter::Branch("Norte".into())
        );
    }

    #[test]
    fn matches() {
        let r = record("A", "X", 2023, 1, 1.0);
        assert!(BranchFilter::All.matches(&r));
        assert!(BranchFilter::Branch("A".into()).matches(&r));
        assert!(!BranchFilter::Branch("B".into()).matches(&r));
    }

    #[test]
    fn view_products_in_first_seen_order() {
        let records = [
            record("A", "Zeta", 2023, 1, 1.0),
            record("A", "Alfa", 2023, 1, 1.0),
            record("A", "Zeta", 2023, 2, 1.0),
            record("A", "Beta", 2023, 1, 1.0),
        ];
        let view = FilteredView {
            filter: BranchFilter::All,
            records: records.iter().collect(),
        };
        assert_eq!(view.products(), vec!["Zeta", "Alfa", "Beta"]);
        assert_eq!(view.rows_for("Zeta").len(), 2);
        assert!(view.rows_for("Gamma").is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TrendLine
// ═══════════════════════════════════════════════════════════════════

#[test]
fn trend_line_evaluate() {
    let line = TrendLine {
        slope: 2.0,
        intercept: 1.0,
    };
    assert_eq!(line.evaluate(0.0), 1.0);
    assert_eq!(line.evaluate(3.0), 7.0);
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DashboardSettings::default();
        assert_eq!(s.page_title, "Dashboard de Ventas");
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.all_branches_label, "Todas");
        assert_eq!(s.employee.employee_id, "58736");
        assert_eq!(s.employee.cohort, "C5");
    }

    #[test]
    fn from_json_partial_keeps_defaults() {
        let s = DashboardSettings::from_json(r#"{"currency_symbol":"€"}"#).unwrap();
        assert_eq!(s.currency_symbol, "€");
        assert_eq!(s.all_branches_label, "Todas");
        assert_eq!(s.employee, EmployeeProfile::default());
    }

    #[test]
    fn from_json_nested_employee() {
        let s = DashboardSettings::from_json(r#"{"employee":{"name":"Ana"}}"#).unwrap();
        assert_eq!(s.employee.name, "Ana");
        assert_eq!(s.employee.employee_id, "58736");
    }

    #[test]
    fn from_json_rejects_empty_all_label() {
        let err = DashboardSettings::from_json(r#"{"all_branches_label":"  "}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn from_json_rejects_malformed() {
        let err = DashboardSettings::from_json("not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }
}
