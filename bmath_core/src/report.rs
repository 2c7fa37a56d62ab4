//! # PDF Report Module
//!
//! Generates PDF summaries of calculator runs using Typst.
//!
//! ## Architecture
//!
//! - Typst templates are embedded as string constants
//! - Data is injected via string formatting before compilation
//! - Output is raw PDF bytes (`Vec<u8>`); writing to disk is the caller's job
//!
//! ## Example
//!
//! ```rust,no_run
//! use bmath_core::calculators::{CalculatorItem, TipSplitInput};
//! use bmath_core::report::render_item_pdf;
//! use bmath_core::workbook::DisplaySettings;
//!
//! let item = CalculatorItem::TipSplit(TipSplitInput {
//!     bill_amount: 86.40,
//!     tip_pct: 18.0,
//!     people: 4,
//! });
//!
//! let pdf_bytes = render_item_pdf(&item, &DisplaySettings::default()).unwrap();
//! std::fs::write("tip_split.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculators::{
    batch_cost, break_even, carbonation, consulting_rate, loan_payment, margin_markup,
    party_budget, pipe_flow, pressure_drop, savings_goal, tank_volume, tip_split, CalculatorItem,
};
use crate::errors::{CalcError, CalcResult};
use crate::workbook::{DisplaySettings, Workbook};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();

        // Bundled fonts from typst-assets (Libertinus Serif, math symbols, etc.)
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }

        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Templates
// ============================================================================

/// Typst page setup shared by all reports
const PAGE_PREAMBLE: &str = r##"
#set page(
  paper: "us-letter",
  margin: (top: 1in, bottom: 1in, left: 1in, right: 1in),
  header: align(right)[
    #text(size: 9pt, fill: gray)[BoringMath Calculators]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 9pt)[{{DATE}}]],
      align(right)[#text(size: 9pt)[Page #counter(page).display()]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)
"##;

/// Typst template for a single calculator section
const SECTION_TEMPLATE: &str = r##"
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[{{TITLE}}]
    #v(4pt)
    #text(size: 12pt, fill: gray)[{{CATEGORY}}]
  ]
]

#v(12pt)

== Inputs

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Parameter*], [*Value*]),
{{INPUT_ROWS}}
)

#v(12pt)

== Results

#table(
  columns: (1fr, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Quantity*], [*Value*]),
{{RESULT_ROWS}}
)

#v(16pt)

#text(size: 9pt, fill: gray)[
  Generated by BoringMath \
  {{URL}}
]
"##;

/// Escape text for safe injection into Typst markup
fn typst_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '`' | '@' | '[' | ']' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render (label, value) pairs as Typst table rows
fn table_rows(rows: &[(String, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("  [{}], [{}],", typst_escape(label), typst_escape(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Row helper: owned label/value pair
fn row(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

/// Compute a calculator item's input and result tables.
///
/// Runs the item's pure calculation and formats both records as display
/// rows. Money rows use the workbook currency; this is an output boundary,
/// so rounding here is fine.
fn item_tables(
    item: &CalculatorItem,
    settings: &DisplaySettings,
) -> CalcResult<(Vec<(String, String)>, Vec<(String, String)>)> {
    let money = |amount: f64| settings.currency.format_amount(amount);

    let tables = match item {
        CalculatorItem::BatchCost(input) => {
            let result = batch_cost::calculate(input)?;
            let mut results = vec![
                row("Total batch cost", money(result.total_batch_cost)),
                row("Cost per unit", money(result.cost_per_unit)),
                row("Suggested retail", money(result.suggested_retail_price)),
                row("Profit per unit", money(result.profit_per_unit)),
            ];
            for line in &result.breakdown {
                results.push(row(
                    &format!("{} share", line.label),
                    format!("{} ({:.1}%)", money(line.amount), line.share_pct),
                ));
            }
            (
                vec![
                    row("Units produced", result.units_costed.to_string()),
                    row("Ingredients", money(input.ingredient_cost)),
                    row(
                        "Labor",
                        format!(
                            "{:.1} h x {}",
                            input.labor_hours,
                            money(input.labor_rate_per_hour)
                        ),
                    ),
                    row("Packaging per unit", money(input.packaging_cost_per_unit)),
                    row("Overhead", format!("{:.1}%", input.overhead_pct)),
                    row("Target margin", format!("{:.1}%", result.margin_pct_applied)),
                ],
                results,
            )
        }
        CalculatorItem::BreakEven(input) => {
            let result = break_even::calculate(input)?;
            (
                vec![
                    row("Fixed costs", money(input.fixed_costs)),
                    row("Unit price", money(input.unit_price)),
                    row("Unit variable cost", money(input.unit_variable_cost)),
                ],
                vec![
                    row("Contribution margin", money(result.contribution_margin)),
                    row(
                        "Break-even units",
                        match result.units_to_sell() {
                            Some(units) => units.to_string(),
                            None => "n/a (unprofitable unit)".to_string(),
                        },
                    ),
                    row(
                        "Break-even revenue",
                        match result.break_even_revenue {
                            Some(revenue) => money(revenue),
                            None => "n/a".to_string(),
                        },
                    ),
                ],
            )
        }
        CalculatorItem::ConsultingRate(input) => {
            let result = consulting_rate::calculate(input)?;
            (
                vec![
                    row("Target income", money(input.target_annual_income)),
                    row(
                        "Billable hours/week",
                        format!("{:.0}", input.billable_hours_per_week),
                    ),
                    row("Weeks off", format!("{:.0}", input.weeks_off_per_year)),
                    row("Annual overhead", money(input.annual_overhead)),
                    row("Profit margin", format!("{:.1}%", input.profit_margin_pct)),
                ],
                vec![
                    row(
                        "Billable hours/year",
                        format!("{:.0}", result.annual_billable_hours),
                    ),
                    row("Required revenue", money(result.required_annual_revenue)),
                    row("Hourly rate", money(result.hourly_rate)),
                    row("Day rate", money(result.day_rate)),
                ],
            )
        }
        CalculatorItem::MarginMarkup(input) => {
            let result = margin_markup::calculate(input)?;
            (
                vec![
                    row("Unit cost", money(input.unit_cost)),
                    row(
                        "Given",
                        format!(
                            "{:.1}% {}",
                            input.percent,
                            match input.basis {
                                margin_markup::PricingBasis::Margin => "margin",
                                margin_markup::PricingBasis::Markup => "markup",
                            }
                        ),
                    ),
                ],
                vec![
                    row("Selling price", money(result.selling_price)),
                    row("Margin", format!("{:.2}%", result.margin_pct)),
                    row("Markup", format!("{:.2}%", result.markup_pct)),
                    row("Gross profit", money(result.gross_profit)),
                ],
            )
        }
        CalculatorItem::LoanPayment(input) => {
            let result = loan_payment::calculate(input)?;
            (
                vec![
                    row("Principal", money(input.principal)),
                    row("Annual rate", format!("{:.2}%", input.annual_rate_pct)),
                    row("Term", format!("{} months", result.months)),
                ],
                vec![
                    row("Monthly payment", money(result.monthly_payment)),
                    row("Total paid", money(result.total_paid)),
                    row("Total interest", money(result.total_interest)),
                ],
            )
        }
        CalculatorItem::SavingsGoal(input) => {
            let result = savings_goal::calculate(input)?;
            (
                vec![
                    row("Goal", money(input.goal_amount)),
                    row("Starting balance", money(input.starting_balance)),
                    row("Monthly contribution", money(input.monthly_contribution)),
                    row("Annual yield", format!("{:.2}%", input.annual_yield_pct)),
                ],
                vec![
                    row(
                        "Months to goal",
                        match result.months_to_goal {
                            Some(months) => months.to_string(),
                            None => "unreachable".to_string(),
                        },
                    ),
                    row(
                        "Total contributed",
                        result
                            .total_contributed
                            .map(&money)
                            .unwrap_or_else(|| "n/a".to_string()),
                    ),
                    row(
                        "Interest earned",
                        result
                            .interest_earned
                            .map(&money)
                            .unwrap_or_else(|| "n/a".to_string()),
                    ),
                ],
            )
        }
        CalculatorItem::TipSplit(input) => {
            let result = tip_split::calculate(input)?;
            (
                vec![
                    row("Bill", money(input.bill_amount)),
                    row("Tip", format!("{:.0}%", input.tip_pct)),
                    row("People", result.people_counted.to_string()),
                ],
                vec![
                    row("Tip amount", money(result.tip_amount)),
                    row("Total with tip", money(result.total_with_tip)),
                    row("Per person", money(result.per_person)),
                ],
            )
        }
        CalculatorItem::PartyBudget(input) => {
            let result = party_budget::calculate(input)?;
            let mut results = vec![
                row("Per guest", money(result.per_guest_budget)),
            ];
            for line in &result.categories {
                results.push(row(
                    &line.label,
                    format!("{} ({:.0}%)", money(line.amount), line.share_pct),
                ));
            }
            results.push(row("Remainder", money(result.remainder)));
            (
                vec![
                    row("Guests", result.guests_counted.to_string()),
                    row("Total budget", money(input.total_budget)),
                ],
                results,
            )
        }
        CalculatorItem::PipeFlow(input) => {
            let result = pipe_flow::calculate(input)?;
            (
                vec![
                    row("Inside diameter", format!("{:.1} mm", input.diameter_mm)),
                    row("Fluid", input.fluid.display_name().to_string()),
                ],
                vec![
                    row("Velocity", format!("{:.3} m/s", result.velocity_m_s)),
                    row("Flow", format!("{:.1} L/min", result.flow_l_min)),
                    row("Flow", format!("{:.2} m3/h", result.flow_m3_h)),
                    row("Reynolds number", format!("{:.0}", result.reynolds)),
                    row("Regime", result.regime.display_name().to_string()),
                ],
            )
        }
        CalculatorItem::PressureDrop(input) => {
            let result = pressure_drop::calculate(input)?;
            (
                vec![
                    row("Inside diameter", format!("{:.1} mm", input.diameter_mm)),
                    row("Length", format!("{:.1} m", input.length_m)),
                    row("Flow", format!("{:.1} L/min", input.flow_l_per_min)),
                    row("Roughness", format!("{:.4} mm", result.roughness_mm_used)),
                    row("Fluid", input.fluid.display_name().to_string()),
                ],
                vec![
                    row("Velocity", format!("{:.3} m/s", result.velocity_m_s)),
                    row("Reynolds number", format!("{:.0}", result.reynolds)),
                    row("Friction factor", format!("{:.5}", result.friction_factor)),
                    row(
                        "Pressure drop",
                        format!(
                            "{:.2} kPa ({:.2} psi)",
                            result.pressure_drop_kpa, result.pressure_drop_psi
                        ),
                    ),
                    row("Head loss", format!("{:.3} m", result.head_loss_m)),
                ],
            )
        }
        CalculatorItem::Carbonation(input) => {
            let result = carbonation::calculate(input)?;
            (
                vec![
                    row(
                        "Temperature",
                        format!("{:.1} °F", result.temperature_f_used),
                    ),
                    row("Target CO2", format!("{:.2} volumes", result.target_volumes)),
                ],
                vec![
                    row(
                        "Regulator pressure",
                        format!(
                            "{:.1} psi ({:.1} kPa)",
                            result.required_gauge_psi, result.required_gauge_kpa
                        ),
                    ),
                    row(
                        "Solubility",
                        format!("{:.3} vol/atm", result.solubility_vol_per_atm),
                    ),
                ],
            )
        }
        CalculatorItem::TankVolume(input) => {
            let result = tank_volume::calculate(input)?;
            (
                vec![row(
                    "Fill height",
                    format!("{:.1} cm", result.fill_height_cm_used),
                )],
                vec![
                    row("Capacity", format!("{:.1} L", result.capacity_l)),
                    row("Filled", format!("{:.1} L", result.filled_l)),
                    row("Fill level", format!("{:.1}%", result.fill_pct)),
                ],
            )
        }
    };

    Ok(tables)
}

/// Build the Typst section source for one item
fn section_source(item: &CalculatorItem, settings: &DisplaySettings) -> CalcResult<String> {
    let calc = item.calculator();
    let (inputs, results) = item_tables(item, settings)?;

    Ok(SECTION_TEMPLATE
        .replace("{{TITLE}}", &typst_escape(calc.display_name()))
        .replace("{{CATEGORY}}", &typst_escape(calc.category().display_name()))
        .replace("{{INPUT_ROWS}}", &table_rows(&inputs))
        .replace("{{RESULT_ROWS}}", &table_rows(&results))
        .replace("{{URL}}", &typst_escape(&calc.url(&settings.site_base))))
}

/// Compile Typst source to PDF bytes
fn compile_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    Ok(pdf_bytes)
}

/// Render a single calculator item to PDF.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If the calculation or rendering fails
pub fn render_item_pdf(item: &CalculatorItem, settings: &DisplaySettings) -> CalcResult<Vec<u8>> {
    let preamble = PAGE_PREAMBLE.replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string());
    let source = format!("{}\n{}", preamble, section_source(item, settings)?);
    compile_pdf(source)
}

/// Render every item in a workbook to a single PDF, one section per page.
///
/// Items are ordered by calculator name for stable output.
pub fn render_workbook_pdf(workbook: &Workbook) -> CalcResult<Vec<u8>> {
    if workbook.items.is_empty() {
        return Err(CalcError::Internal {
            message: "Workbook has no items to export".to_string(),
        });
    }

    let mut items: Vec<&CalculatorItem> = workbook.items.values().collect();
    items.sort_by_key(|item| item.calculator().display_name());

    let mut source =
        PAGE_PREAMBLE.replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string());

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            source.push_str("\n#pagebreak()\n");
        }
        source.push_str(&section_source(item, &workbook.settings)?);
    }

    compile_pdf(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::TipSplitInput;

    #[test]
    fn test_typst_escape() {
        assert_eq!(typst_escape("plain"), "plain");
        assert_eq!(typst_escape("$1,234"), "\\$1,234");
        assert_eq!(typst_escape("a#b"), "a\\#b");
    }

    #[test]
    fn test_section_source_contains_data() {
        let item = CalculatorItem::TipSplit(TipSplitInput {
            bill_amount: 100.0,
            tip_pct: 20.0,
            people: 4,
        });
        let source = section_source(&item, &DisplaySettings::default()).unwrap();
        assert!(source.contains("Tip & Bill Splitter"));
        assert!(source.contains("\\$30.00"));
        assert!(source.contains("calculators/tip-split"));
    }

    #[test]
    fn test_table_rows_shape() {
        let rows = table_rows(&[("Label".to_string(), "Value".to_string())]);
        assert_eq!(rows, "  [Label], [Value],");
    }

    #[test]
    fn test_empty_workbook_rejected() {
        let workbook = Workbook::new("Empty", "tester");
        assert!(render_workbook_pdf(&workbook).is_err());
    }
}
