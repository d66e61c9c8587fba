//! tarifa CLI - driving adapter for the rate router.
//!
//! Subcommands:
//! - `cheapest <plan> <number>` - print the cheapest carrier for a number
//! - `rate <plan> <carrier> <number>` - rate for one named carrier
//! - `check <plan>` - validate a rate plan loads without errors

use std::process;

use tarifa::{RateRouter, RateTable, RouterConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "cheapest" => cmd_cheapest(&args[2..]),
        "rate" => cmd_rate(&args[2..]),
        "check" => cmd_check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_cheapest(args: &[String]) -> Result<(), String> {
    if args.len() != 2 {
        return Err("cheapest requires <plan> <number>".into());
    }

    let router = load_router(&args[0])?;
    match router.find_cheapest(&args[1]).map_err(|e| e.to_string())? {
        Some((carrier, rate)) => println!("{}: {rate}", carrier.name()),
        None => println!("(no rate)"),
    }

    Ok(())
}

fn cmd_rate(args: &[String]) -> Result<(), String> {
    if args.len() != 3 {
        return Err("rate requires <plan> <carrier> <number>".into());
    }

    let router = load_router(&args[0])?;
    let name = &args[1];
    let carrier = router
        .carriers()
        .iter()
        .find(|c| c.name() == name.as_str())
        .ok_or_else(|| {
            let registered: Vec<&str> = router.carriers().iter().map(|c| c.name()).collect();
            format!(
                "unknown carrier \"{name}\", registered: {}",
                registered.join(", ")
            )
        })?;

    match carrier.rate_for_number(&args[2]).map_err(|e| e.to_string())? {
        Some(rate) => println!("{}: {rate}", carrier.name()),
        None => println!("(no rate)"),
    }

    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), String> {
    if args.len() != 1 {
        return Err("check requires a plan file path".into());
    }

    let router = load_router(&args[0])?;
    println!("Plan valid, {} carrier(s)", router.len());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Plan loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_router(path: &str) -> Result<RateRouter, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))?;

    parse_plan(path, &content)?
        .load()
        .map_err(|e| format!("plan invalid: {e}"))
}

fn parse_plan(path: &str, content: &str) -> Result<RouterConfig, String> {
    let is_json = std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(content).map_err(|e| format!("YAML parse error: {e}"))
    }
}

fn print_usage() {
    eprintln!(
        "Usage: tarifa <command> [options]

Commands:
  cheapest <plan> <number>          Print the cheapest carrier for a number
  rate <plan> <carrier> <number>    Print one carrier's rate for a number
  check <plan>                      Validate a rate plan
  help                              Show this help

Plan files are YAML by default; \".json\" files are parsed as JSON."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML_PLAN: &str = r#"
carriers:
  - name: Operator A
    rates:
      - { prefix: "46", rate: 0.17 }
"#;

    const JSON_PLAN: &str = r#"{
        "carriers": [
            { "name": "Operator A", "rates": [{ "prefix": "46", "rate": 0.17 }] }
        ]
    }"#;

    #[test]
    fn parse_plan_yaml_by_default() {
        let config = parse_plan("plan.yaml", YAML_PLAN).unwrap();
        assert_eq!(config.carriers.len(), 1);
        assert_eq!(config.carriers[0].name, "Operator A");
    }

    #[test]
    fn parse_plan_json_by_extension() {
        let config = parse_plan("plan.JSON", JSON_PLAN).unwrap();
        assert_eq!(config.carriers.len(), 1);
    }

    #[test]
    fn parse_plan_rejects_mismatched_format() {
        assert!(parse_plan("plan.json", YAML_PLAN).is_err());
    }

    #[test]
    fn commands_require_arguments() {
        assert!(cmd_cheapest(&[]).is_err());
        assert!(cmd_rate(&["only".into()]).is_err());
        assert!(cmd_check(&[]).is_err());
    }
}
