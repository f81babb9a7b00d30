use serde::Serialize;

use crate::estimation::{
    ComplexityLevel, ExperienceLevel, ProjectType, RateTable, UrgencyLevel,
};

pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_rates(table: &RateTable, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(table);
    }

    println!("Base hours and market range:");
    for project in ProjectType::ALL {
        let hours = table.base_hours(project).unwrap_or_default();
        match table.market_range(project) {
            Some(range) => println!(
                "  {:10} {:>4}h   {} - {}",
                project.as_str(),
                hours,
                range.min,
                range.max
            ),
            None => println!("  {:10} {:>4}h", project.as_str(), hours),
        }
    }

    println!("Complexity multipliers:");
    for level in ComplexityLevel::ALL {
        print_multiplier(level.as_str(), table.complexity_multiplier(level));
    }

    println!("Experience multipliers:");
    for level in ExperienceLevel::ALL {
        print_multiplier(level.as_str(), table.experience_multiplier(level));
    }

    println!("Urgency multipliers:");
    for level in UrgencyLevel::ALL {
        print_multiplier(level.as_str(), table.rush_multiplier(level));
    }

    Ok(())
}

fn print_multiplier(key: &str, value: Option<rust_decimal::Decimal>) {
    match value {
        Some(v) => println!("  {:10} x{}", key, v),
        None => println!("  {:10} -", key),
    }
}
