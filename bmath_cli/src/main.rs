//! # BoringMath CLI
//!
//! Terminal front-end for the calculator engine. Presents the calculator
//! menu from the registry, prompts for inputs with sensible defaults, and
//! prints a formatted result block plus the JSON encoding of the result
//! record (the same record a web form would consume).
//!
//! Every run is added to an in-memory workbook; on exit the session can be
//! saved to a `.bmk` file.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bmath_core::calculators::{
    batch_cost, break_even, carbonation, consulting_rate, loan_payment, margin_markup,
    party_budget, pipe_flow, pressure_drop, savings_goal, tank_volume, tip_split, CalculatorItem,
};
use bmath_core::presets::{CurrencyCode, EventType, Fluid, PipeMaterial};
use bmath_core::registry::Calculator;
use bmath_core::workbook::Workbook;
use bmath_core::{save_workbook, share, CalcResult};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt).parse().unwrap_or(default)
}

/// Prompt for one of the listed options by number, defaulting to the first.
fn prompt_choice<'a, T>(label: &str, options: &'a [(T, &str)]) -> &'a T {
    println!("{}:", label);
    for (index, (_, name)) in options.iter().enumerate() {
        println!("  {}. {}", index + 1, name);
    }
    let picked = prompt_u32("Choice [1]: ", 1).max(1) as usize;
    &options.get(picked - 1).unwrap_or(&options[0]).0
}

fn status_line(label: &str, value: String) {
    println!("  {:<22} {}", label, value);
}

fn print_header(calc: Calculator) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", calc.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
}

fn print_json<T: serde::Serialize>(result: &T) {
    println!();
    println!("JSON result record:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn print_share(text: &str) {
    println!();
    println!("Share text:");
    println!("{}", text);
}

const SITE: &str = "https://boring-math.com";
const CURRENCY: CurrencyCode = CurrencyCode::Usd;

fn run_batch_cost() -> CalcResult<CalculatorItem> {
    let input = batch_cost::BatchCostInput {
        units_produced: prompt_u32("Units per batch [48]: ", 48),
        ingredient_cost: prompt_f64("Ingredient cost per batch [60.0]: ", 60.0),
        labor_hours: prompt_f64("Labor hours [3.0]: ", 3.0),
        labor_rate_per_hour: prompt_f64("Labor rate per hour [18.0]: ", 18.0),
        packaging_cost_per_unit: prompt_f64("Packaging per unit [0.35]: ", 0.35),
        overhead_pct: prompt_f64("Overhead % [15]: ", 15.0),
        target_margin_pct: prompt_f64("Target margin % [60]: ", 60.0),
    };
    let result = batch_cost::calculate(&input)?;

    print_header(Calculator::BatchCost);
    status_line("Batch cost:", CURRENCY.format_amount(result.total_batch_cost));
    status_line("Cost per unit:", CURRENCY.format_amount(result.cost_per_unit));
    status_line(
        "Suggested retail:",
        CURRENCY.format_amount(result.suggested_retail_price),
    );
    status_line(
        "Profit per unit:",
        CURRENCY.format_amount(result.profit_per_unit),
    );
    println!();
    println!("Breakdown:");
    for line in &result.breakdown {
        println!(
            "  {:<14} {:>12}  ({:.1}%)",
            line.label,
            CURRENCY.format_amount(line.amount),
            line.share_pct
        );
    }
    print_share(&share::batch_cost(&result, CURRENCY, SITE));
    print_json(&result);
    Ok(CalculatorItem::BatchCost(input))
}

fn run_break_even() -> CalcResult<CalculatorItem> {
    let input = break_even::BreakEvenInput {
        fixed_costs: prompt_f64("Fixed costs [12000.0]: ", 12_000.0),
        unit_price: prompt_f64("Unit price [25.0]: ", 25.0),
        unit_variable_cost: prompt_f64("Unit variable cost [10.0]: ", 10.0),
    };
    let result = break_even::calculate(&input)?;

    print_header(Calculator::BreakEven);
    status_line(
        "Contribution margin:",
        CURRENCY.format_amount(result.contribution_margin),
    );
    match result.units_to_sell() {
        Some(units) => {
            status_line("Break-even units:", units.to_string());
            status_line(
                "Break-even revenue:",
                CURRENCY.format_amount(result.break_even_revenue.unwrap_or(0.0)),
            );
        }
        None => println!("  No break-even point: each sale loses money."),
    }
    print_share(&share::break_even(&result, CURRENCY, SITE));
    print_json(&result);
    Ok(CalculatorItem::BreakEven(input))
}

fn run_consulting_rate() -> CalcResult<CalculatorItem> {
    let input = consulting_rate::ConsultingRateInput {
        target_annual_income: prompt_f64("Target annual income [90000.0]: ", 90_000.0),
        billable_hours_per_week: prompt_f64("Billable hours per week [25.0]: ", 25.0),
        weeks_off_per_year: prompt_f64("Weeks off per year [6.0]: ", 6.0),
        annual_overhead: prompt_f64("Annual overhead [8000.0]: ", 8_000.0),
        profit_margin_pct: prompt_f64("Profit margin % [10]: ", 10.0),
    };
    let result = consulting_rate::calculate(&input)?;

    print_header(Calculator::ConsultingRate);
    status_line(
        "Billable hours/year:",
        format!("{:.0}", result.annual_billable_hours),
    );
    status_line("Hourly rate:", CURRENCY.format_amount(result.hourly_rate));
    status_line("Day rate:", CURRENCY.format_amount(result.day_rate));
    status_line(
        "Monthly revenue:",
        CURRENCY.format_amount(result.monthly_revenue),
    );
    print_json(&result);
    Ok(CalculatorItem::ConsultingRate(input))
}

fn run_margin_markup() -> CalcResult<CalculatorItem> {
    let basis = *prompt_choice(
        "Percent given as",
        &[
            (margin_markup::PricingBasis::Margin, "Margin (share of price)"),
            (margin_markup::PricingBasis::Markup, "Markup (share of cost)"),
        ],
    );
    let input = margin_markup::MarginMarkupInput {
        unit_cost: prompt_f64("Unit cost [40.0]: ", 40.0),
        basis,
        percent: prompt_f64("Percent [50]: ", 50.0),
    };
    let result = margin_markup::calculate(&input)?;

    print_header(Calculator::MarginMarkup);
    status_line("Selling price:", CURRENCY.format_amount(result.selling_price));
    status_line("Margin:", format!("{:.2}%", result.margin_pct));
    status_line("Markup:", format!("{:.2}%", result.markup_pct));
    status_line("Gross profit:", CURRENCY.format_amount(result.gross_profit));
    print_json(&result);
    Ok(CalculatorItem::MarginMarkup(input))
}

fn run_loan_payment() -> CalcResult<CalculatorItem> {
    let input = loan_payment::LoanPaymentInput {
        principal: prompt_f64("Principal [250000.0]: ", 250_000.0),
        annual_rate_pct: prompt_f64("Annual rate % [5.5]: ", 5.5),
        term_months: prompt_u32("Term in months [360]: ", 360),
    };
    let result = loan_payment::calculate(&input)?;

    print_header(Calculator::LoanPayment);
    status_line(
        "Monthly payment:",
        CURRENCY.format_amount(result.monthly_payment),
    );
    status_line("Total paid:", CURRENCY.format_amount(result.total_paid));
    status_line(
        "Total interest:",
        CURRENCY.format_amount(result.total_interest),
    );
    print_json(&result);
    Ok(CalculatorItem::LoanPayment(input))
}

fn run_savings_goal() -> CalcResult<CalculatorItem> {
    let input = savings_goal::SavingsGoalInput {
        goal_amount: prompt_f64("Goal amount [20000.0]: ", 20_000.0),
        starting_balance: prompt_f64("Starting balance [2500.0]: ", 2_500.0),
        monthly_contribution: prompt_f64("Monthly contribution [400.0]: ", 400.0),
        annual_yield_pct: prompt_f64("Annual yield % [4.0]: ", 4.0),
    };
    let result = savings_goal::calculate(&input)?;

    print_header(Calculator::SavingsGoal);
    match result.months_to_goal {
        Some(months) => {
            status_line(
                "Months to goal:",
                format!("{} ({:.1} years)", months, months as f64 / 12.0),
            );
            status_line(
                "Total contributed:",
                CURRENCY.format_amount(result.total_contributed.unwrap_or(0.0)),
            );
            status_line(
                "Interest earned:",
                CURRENCY.format_amount(result.interest_earned.unwrap_or(0.0)),
            );
        }
        None => println!("  Goal is unreachable with these inputs."),
    }
    print_json(&result);
    Ok(CalculatorItem::SavingsGoal(input))
}

fn run_tip_split() -> CalcResult<CalculatorItem> {
    let input = tip_split::TipSplitInput {
        bill_amount: prompt_f64("Bill amount [86.40]: ", 86.40),
        tip_pct: prompt_f64("Tip % [18]: ", 18.0),
        people: prompt_u32("People [4]: ", 4),
    };
    let result = tip_split::calculate(&input)?;

    print_header(Calculator::TipSplit);
    status_line("Tip:", CURRENCY.format_amount(result.tip_amount));
    status_line("Total:", CURRENCY.format_amount(result.total_with_tip));
    status_line("Per person:", CURRENCY.format_amount(result.per_person));
    print_share(&share::tip_split(&result, CURRENCY, SITE));
    print_json(&result);
    Ok(CalculatorItem::TipSplit(input))
}

fn run_party_budget() -> CalcResult<CalculatorItem> {
    let event = *prompt_choice(
        "Event type",
        &[
            (EventType::Birthday, EventType::Birthday.display_name()),
            (EventType::Wedding, EventType::Wedding.display_name()),
            (EventType::Corporate, EventType::Corporate.display_name()),
            (EventType::KidsParty, EventType::KidsParty.display_name()),
            (EventType::Casual, EventType::Casual.display_name()),
        ],
    );
    let input = party_budget::PartyBudgetInput {
        guests: prompt_u32("Guests [30]: ", 30),
        total_budget: prompt_f64("Total budget [1500.0]: ", 1_500.0),
        split: party_budget::SplitChoice::Preset { event },
    };
    let result = party_budget::calculate(&input)?;

    print_header(Calculator::PartyBudget);
    status_line(
        "Per guest:",
        CURRENCY.format_amount(result.per_guest_budget),
    );
    println!();
    println!("Categories:");
    for line in &result.categories {
        println!(
            "  {:<14} {:>12}  ({:.0}%)",
            line.label,
            CURRENCY.format_amount(line.amount),
            line.share_pct
        );
    }
    print_json(&result);
    Ok(CalculatorItem::PartyBudget(input))
}

fn fluid_options() -> Vec<(Fluid, &'static str)> {
    Fluid::ALL
        .iter()
        .map(|fluid| (*fluid, fluid.display_name()))
        .collect()
}

fn run_pipe_flow() -> CalcResult<CalculatorItem> {
    let diameter_mm = prompt_f64("Inside diameter (mm) [50.0]: ", 50.0);
    let fluid = *prompt_choice("Fluid", &fluid_options());
    let flow = prompt_f64("Flow (L/min) [120.0]: ", 120.0);
    let input = pipe_flow::PipeFlowInput {
        diameter_mm,
        spec: pipe_flow::FlowSpec::VolumetricFlow { l_per_min: flow },
        fluid,
    };
    let result = pipe_flow::calculate(&input)?;

    print_header(Calculator::PipeFlow);
    status_line("Velocity:", format!("{:.3} m/s", result.velocity_m_s));
    status_line("Flow:", format!("{:.2} m³/h", result.flow_m3_h));
    status_line("Reynolds:", format!("{:.0}", result.reynolds));
    status_line("Regime:", result.regime.display_name().to_string());
    print_json(&result);
    Ok(CalculatorItem::PipeFlow(input))
}

fn run_pressure_drop() -> CalcResult<CalculatorItem> {
    let diameter_mm = prompt_f64("Inside diameter (mm) [50.0]: ", 50.0);
    let length_m = prompt_f64("Pipe length (m) [25.0]: ", 25.0);
    let flow_l_per_min = prompt_f64("Flow (L/min) [120.0]: ", 120.0);
    let material = *prompt_choice(
        "Pipe material",
        &PipeMaterial::ALL
            .iter()
            .map(|mat| (*mat, mat.display_name()))
            .collect::<Vec<_>>(),
    );
    let fluid = *prompt_choice("Fluid", &fluid_options());

    let input = pressure_drop::PressureDropInput {
        diameter_mm,
        length_m,
        flow_l_per_min,
        roughness: pressure_drop::RoughnessSpec::Material { material },
        fluid,
    };
    let result = pressure_drop::calculate(&input)?;

    print_header(Calculator::PressureDrop);
    status_line("Velocity:", format!("{:.3} m/s", result.velocity_m_s));
    status_line("Reynolds:", format!("{:.0}", result.reynolds));
    status_line("Friction factor:", format!("{:.5}", result.friction_factor));
    status_line(
        "Pressure drop:",
        format!(
            "{:.2} kPa ({:.2} psi)",
            result.pressure_drop_kpa, result.pressure_drop_psi
        ),
    );
    status_line("Head loss:", format!("{:.3} m", result.head_loss_m));
    print_share(&share::pressure_drop(&result, SITE));
    print_json(&result);
    Ok(CalculatorItem::PressureDrop(input))
}

fn run_carbonation() -> CalcResult<CalculatorItem> {
    let input = carbonation::CarbonationInput {
        temperature: prompt_f64("Beverage temperature (°F) [38.0]: ", 38.0),
        temp_unit: carbonation::TempUnit::Fahrenheit,
        target_co2_volumes: prompt_f64("Target CO2 volumes [2.4]: ", 2.4),
    };
    let result = carbonation::calculate(&input)?;

    print_header(Calculator::Carbonation);
    status_line(
        "Regulator pressure:",
        format!(
            "{:.1} psi ({:.1} kPa)",
            result.required_gauge_psi, result.required_gauge_kpa
        ),
    );
    status_line(
        "Solubility:",
        format!("{:.3} vol/atm", result.solubility_vol_per_atm),
    );
    print_share(&share::carbonation(&result, SITE));
    print_json(&result);
    Ok(CalculatorItem::Carbonation(input))
}

fn run_tank_volume() -> CalcResult<CalculatorItem> {
    #[derive(Clone, Copy, PartialEq)]
    enum Shape {
        Vertical,
        Horizontal,
        Rectangular,
    }

    let shape = *prompt_choice(
        "Tank shape",
        &[
            (Shape::Vertical, "Vertical cylinder"),
            (Shape::Horizontal, "Horizontal cylinder"),
            (Shape::Rectangular, "Rectangular"),
        ],
    );

    let geometry = match shape {
        Shape::Vertical => tank_volume::TankGeometry::VerticalCylinder {
            diameter_cm: prompt_f64("Diameter (cm) [100.0]: ", 100.0),
            height_cm: prompt_f64("Height (cm) [150.0]: ", 150.0),
        },
        Shape::Horizontal => tank_volume::TankGeometry::HorizontalCylinder {
            diameter_cm: prompt_f64("Diameter (cm) [120.0]: ", 120.0),
            length_cm: prompt_f64("Length (cm) [300.0]: ", 300.0),
        },
        Shape::Rectangular => tank_volume::TankGeometry::Rectangular {
            length_cm: prompt_f64("Length (cm) [100.0]: ", 100.0),
            width_cm: prompt_f64("Width (cm) [50.0]: ", 50.0),
            height_cm: prompt_f64("Height (cm) [40.0]: ", 40.0),
        },
    };

    let input = tank_volume::TankVolumeInput {
        geometry,
        fill_height_cm: prompt_f64("Fill height (cm) [0.0]: ", 0.0),
    };
    let result = tank_volume::calculate(&input)?;

    print_header(Calculator::TankVolume);
    status_line("Capacity:", format!("{:.1} L", result.capacity_l));
    status_line("Filled:", format!("{:.1} L", result.filled_l));
    status_line("Fill level:", format!("{:.1}%", result.fill_pct));
    print_json(&result);
    Ok(CalculatorItem::TankVolume(input))
}

fn run_calculator(calc: Calculator) -> CalcResult<CalculatorItem> {
    match calc {
        Calculator::BatchCost => run_batch_cost(),
        Calculator::BreakEven => run_break_even(),
        Calculator::ConsultingRate => run_consulting_rate(),
        Calculator::MarginMarkup => run_margin_markup(),
        Calculator::LoanPayment => run_loan_payment(),
        Calculator::SavingsGoal => run_savings_goal(),
        Calculator::TipSplit => run_tip_split(),
        Calculator::PartyBudget => run_party_budget(),
        Calculator::PipeFlow => run_pipe_flow(),
        Calculator::PressureDrop => run_pressure_drop(),
        Calculator::Carbonation => run_carbonation(),
        Calculator::TankVolume => run_tank_volume(),
    }
}

fn print_menu() {
    println!();
    println!("Calculators:");
    for (index, calc) in Calculator::ALL.iter().enumerate() {
        println!(
            "  {:>2}. {:<32} [{}]",
            index + 1,
            calc.display_name(),
            calc.category()
        );
    }
    println!("   0. Quit");
}

fn main() {
    println!("BoringMath CLI");
    println!("==============");

    let mut session = Workbook::new("CLI session", "cli");

    loop {
        print_menu();
        let picked = prompt_u32("Pick a calculator [0]: ", 0);
        if picked == 0 || picked as usize > Calculator::ALL.len() {
            break;
        }
        let calc = Calculator::ALL[picked as usize - 1];

        match run_calculator(calc) {
            Ok(item) => {
                session.add_item(item);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
        }
    }

    if session.item_count() > 0 {
        let answer = prompt_line("Save this session to session.bmk? [y/N]: ");
        if answer.eq_ignore_ascii_case("y") {
            match save_workbook(&session, Path::new("session.bmk")) {
                Ok(()) => println!("Saved {} item(s) to session.bmk", session.item_count()),
                Err(e) => eprintln!("Save failed: {}", e),
            }
        }
    }

    println!("Bye.");
}
