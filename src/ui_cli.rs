use std::io::{self, Write};

use crate::app::AppError;
use crate::cashflow;
use crate::config::Config;
use crate::controller::{self, AreaState};
use crate::format;
use crate::i18n::{keys, Translator};
use crate::projection;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Projection,
    CashFlow,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECTION));
    println!("{}", tr.t(keys::MAIN_MENU_CASHFLOW));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Projection),
            "2" => return Ok(MenuChoice::CashFlow),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 투자 수익 전망 메뉴를 처리한다.
pub fn handle_projection(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    println!("{}", tr.t(keys::PROJECTION_AREA_NOTE));
    let area = read_area(tr)?;
    let result = projection::compute(f64::from(area));
    println!(
        "{} {} kW",
        tr.t(keys::RESULT_SYSTEM_SIZE),
        format::number(result.system_size_kw, 1)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_SYSTEM_COST),
        format::currency(result.system_cost)
    );
    println!(
        "{} {} kWh",
        tr.t(keys::RESULT_ANNUAL_PRODUCTION),
        format::number(result.annual_production_kwh, 0)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_ANNUAL_SAVINGS),
        format::currency(result.annual_savings)
    );
    println!(
        "{} {} t/yr",
        tr.t(keys::RESULT_CO2_OFFSET),
        format::number(result.co2_savings_tons, 1)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TREES),
        format::number(result.trees_planted, 0)
    );
    let series = cashflow::project(
        result.system_cost,
        result.annual_savings,
        projection::SAVINGS_ESCALATION_RATE,
        projection::PROJECTION_YEARS,
    );
    match cashflow::payback_year(&series) {
        Some(year) => println!("{} {year}", tr.t(keys::RESULT_PAYBACK)),
        None => println!("{}", tr.t(keys::RESULT_PAYBACK_NONE)),
    }
    Ok(())
}

/// 현금흐름 표 메뉴를 처리한다.
pub fn handle_cashflow(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CASHFLOW_HEADING));
    println!("{}", tr.t(keys::PROJECTION_AREA_NOTE));
    let area = read_area(tr)?;
    let result = projection::compute(f64::from(area));
    let series = cashflow::project(
        result.system_cost,
        result.annual_savings,
        projection::SAVINGS_ESCALATION_RATE,
        projection::PROJECTION_YEARS,
    );
    println!(
        "{:>4}  {:>18}  {:>18}",
        tr.t(keys::CASHFLOW_COL_YEAR),
        tr.t(keys::CASHFLOW_COL_SAVINGS),
        tr.t(keys::CASHFLOW_COL_BALANCE)
    );
    for (year, balance) in series.iter().enumerate() {
        let yearly = if year == 0 {
            0.0
        } else {
            result.annual_savings
                * (1.0 + projection::SAVINGS_ESCALATION_RATE).powi(year as i32 - 1)
        };
        println!(
            "{year:>4}  {:>18}  {:>18}",
            format::currency(yearly),
            format::currency(*balance)
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "en-us".to_string(),
        "2" => "ko-kr".to_string(),
        "3" => "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

/// 면적을 읽어 [10,500] 범위로 조정해 반환한다.
fn read_area(tr: &Translator) -> Result<u32, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_AREA))?;
        if let Some(value) = controller::parse_area(&s) {
            let mut state = AreaState::new();
            state.set_clamped(value);
            return Ok(state.get());
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
