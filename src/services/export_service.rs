//! Exportación de reportes
//!
//! CSV de job cards y documento HTML imprimible (el "PDF" del dashboard
//! se obtiene con el diálogo de impresión del navegador).

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::fmt::Write;

use crate::models::job_card::JobCard;
use crate::models::train::{Train, TrainStatus};

pub const CSV_HEADERS: [&str; 7] = [
    "Job Card ID",
    "Train ID",
    "Task Type",
    "Priority",
    "Deadline",
    "Status",
    "Description",
];

fn quote_csv(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// CSV con cabecera y una fila por job card, todos los campos entre comillas
pub fn job_cards_to_csv(job_cards: &[JobCard]) -> String {
    let mut lines = Vec::with_capacity(job_cards.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for jc in job_cards {
        let deadline = jc.deadline.format("%Y-%m-%d").to_string();
        let row = [
            jc.job_card_id.as_str(),
            jc.train_id.as_str(),
            jc.task_type.label(),
            jc.priority.label(),
            deadline.as_str(),
            jc.status.label(),
            jc.description.as_str(),
        ];
        lines.push(row.iter().map(|cell| quote_csv(cell)).collect::<Vec<_>>().join(","));
    }

    lines.join("\n")
}

/// `job-cards-report-<YYYY-MM-DD>.csv`
pub fn csv_filename(date: NaiveDate) -> String {
    format!("job-cards-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Escapar texto para HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Kilometraje con separador de miles: 45200 → "45,200"
pub fn format_mileage(mileage: f64) -> String {
    let whole = mileage.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn count_status(trains: &[Train], status: TrainStatus) -> usize {
    trains.iter().filter(|t| t.status == status).count()
}

const REPORT_STYLE: &str = r#"
    @page { size: A4; margin: 20mm; }
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Arial', sans-serif; line-height: 1.6; color: #333; background: #fff; }
    .header { text-align: center; padding: 20px 0; border-bottom: 3px solid #4D96FF; margin-bottom: 30px; }
    .header h1 { color: #4D96FF; font-size: 28px; margin-bottom: 5px; }
    .header p { color: #666; font-size: 14px; }
    .date { text-align: right; color: #666; margin-bottom: 20px; font-size: 12px; }
    .summary { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; margin-bottom: 30px; }
    .summary-card { border: 2px solid #e0e0e0; border-radius: 8px; padding: 15px; text-align: center; }
    .summary-card h3 { font-size: 14px; color: #666; margin-bottom: 5px; }
    .summary-card p { font-size: 24px; font-weight: bold; }
    .summary-card.run p { color: #38B000; }
    .summary-card.standby p { color: #FFD60A; }
    .summary-card.maintenance p { color: #FF4747; }
    h2 { color: #4D96FF; font-size: 20px; margin: 30px 0 15px; padding-bottom: 10px; border-bottom: 2px solid #e0e0e0; }
    table { width: 100%; border-collapse: collapse; margin-bottom: 30px; font-size: 12px; }
    thead { background: #4D96FF; color: white; }
    th, td { padding: 10px; text-align: left; border: 1px solid #ddd; }
    tbody tr:nth-child(even) { background: #f9f9f9; }
    .badge { display: inline-block; padding: 4px 8px; border-radius: 4px; font-size: 11px; font-weight: bold; }
    .badge.high { background: #FFE5E5; color: #FF4747; }
    .badge.medium { background: #FFF9E5; color: #FFD60A; }
    .badge.low { background: #E5F9E5; color: #38B000; }
    .badge.completed { background: #E5F9E5; color: #38B000; }
    .badge.in-progress { background: #FFF9E5; color: #FFD60A; }
    .badge.pending { background: #FFE5E5; color: #FF4747; }
    .footer { text-align: center; margin-top: 40px; padding-top: 20px; border-top: 2px solid #e0e0e0; color: #666; font-size: 12px; }
    @media print { body { print-color-adjust: exact; -webkit-print-color-adjust: exact; } }
"#;

/// Documento HTML autocontenido que abre el diálogo de impresión al cargar
pub fn render_print_report(
    job_cards: &[JobCard],
    trains: &[Train],
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    // write! sobre String no puede fallar
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Metro Train Report</title>
  <style>{style}</style>
</head>
<body>
  <div class="header">
    <h1>🚇 Metro Train Management Report</h1>
    <p>Comprehensive Job Card Timeline &amp; Fleet Status</p>
  </div>
  <div class="date">Generated on: {generated}</div>
  <div class="summary">
    <div class="summary-card run"><h3>Running Trains</h3><p>{run}</p></div>
    <div class="summary-card standby"><h3>Standby Trains</h3><p>{standby}</p></div>
    <div class="summary-card maintenance"><h3>In Maintenance</h3><p>{maintenance}</p></div>
  </div>
  <h2>Job Card Timeline ({count} Active Tasks)</h2>
  <table>
    <thead>
      <tr><th>Job Card ID</th><th>Train ID</th><th>Task Type</th><th>Priority</th><th>Deadline</th><th>Status</th><th>Description</th></tr>
    </thead>
    <tbody>
"#,
        style = REPORT_STYLE,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        run = count_status(trains, TrainStatus::Run),
        standby = count_status(trains, TrainStatus::Standby),
        maintenance = count_status(trains, TrainStatus::Maintenance),
        count = job_cards.len(),
    );

    for jc in job_cards {
        let _ = writeln!(
            html,
            r#"      <tr><td><strong>{id}</strong></td><td>{train}</td><td>{task}</td><td><span class="badge {priority_class}">{priority}</span></td><td>{deadline}</td><td><span class="badge {status_class}">{status}</span></td><td>{description}</td></tr>"#,
            id = escape_html(&jc.job_card_id),
            train = escape_html(&jc.train_id),
            task = jc.task_type.label(),
            priority_class = jc.priority.label().to_ascii_lowercase(),
            priority = jc.priority.label(),
            deadline = jc.deadline.format("%d %b %Y"),
            status_class = jc.status.css_class(),
            status = jc.status.label(),
            description = escape_html(&jc.description),
        );
    }

    html.push_str(
        r#"    </tbody>
  </table>
  <h2>Train Fleet Summary</h2>
  <table>
    <thead>
      <tr><th>Train ID</th><th>Status</th><th>Mileage (km)</th><th>Fitness</th><th>Cleaning</th><th>Branding</th></tr>
    </thead>
    <tbody>
"#,
    );

    for train in trains {
        let _ = writeln!(
            html,
            r#"      <tr><td><strong>{id}</strong></td><td><span class="badge {status_class}">{status}</span></td><td>{mileage}</td><td>{fitness}</td><td>{cleaning}</td><td>{branding}</td></tr>"#,
            id = escape_html(&train.train_id),
            status_class = train.status.label().to_ascii_lowercase(),
            status = train.status.label(),
            mileage = format_mileage(train.mileage),
            fitness = train.fitness_status.label(),
            cleaning = train.cleaning_status.label(),
            branding = train.branding_status.label(),
        );
    }

    let _ = write!(
        html,
        r#"    </tbody>
  </table>
  <div class="footer">
    <p>Metro Train Management System &copy; {year}</p>
    <p>This report contains confidential information. Handle with care.</p>
  </div>
  <script>
    window.onload = function() {{
      setTimeout(function() {{ window.print(); }}, 500);
    }};
    window.onafterprint = function() {{ window.close(); }};
  </script>
</body>
</html>
"#,
        year = generated_at.year(),
    );

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed::{seed_job_cards, seed_trains};
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let cards = seed_job_cards(today());
        let csv = job_cards_to_csv(&cards);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Job Card ID,Train ID,Task Type,Priority,Deadline,Status,Description");
        assert_eq!(
            lines[2],
            "\"JC-002\",\"KM-03\",\"Cleaning\",\"Medium\",\"2026-10-17\",\"In Progress\",\"Interior deep cleaning\""
        );
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let mut cards = seed_job_cards(today());
        cards.truncate(1);
        cards[0].description = "Replace \"left\" door, seal".to_string();
        let csv = job_cards_to_csv(&cards);
        assert!(csv.ends_with("\"Replace \"\"left\"\" door, seal\""));
    }

    #[test]
    fn test_csv_empty_has_header_only() {
        assert_eq!(job_cards_to_csv(&[]), CSV_HEADERS.join(","));
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename(today()), "job-cards-report-2026-10-16.csv");
    }

    #[test]
    fn test_format_mileage() {
        assert_eq!(format_mileage(0.0), "0");
        assert_eq!(format_mileage(999.0), "999");
        assert_eq!(format_mileage(45_200.0), "45,200");
        assert_eq!(format_mileage(1_234_567.4), "1,234,567");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_print_report_contents() {
        let trains = seed_trains();
        let mut cards = seed_job_cards(today());
        cards[0].description = "<script>alert(1)</script>".to_string();
        let generated = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();

        let html = render_print_report(&cards, &trains, generated);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h3>Running Trains</h3><p>5</p>"));
        assert!(html.contains("<h3>Standby Trains</h3><p>3</p>"));
        assert!(html.contains("<h3>In Maintenance</h3><p>2</p>"));
        assert!(html.contains("Job Card Timeline (3 Active Tasks)"));
        assert!(html.contains("45,200"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("window.print()"));
        assert!(html.contains("&copy; 2026"));
        assert!(html.contains("Generated on: 2026-10-16 09:30:00 UTC"));
    }
}
