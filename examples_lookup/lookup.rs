use env_accessor::init::init_tracing;
use env_accessor::{env, env_or, env_value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "UNKNOWN_ENVIRONMENT_VARIABLE".to_string());

    println!("env({name:?}) = {:?}", env(&name));
    println!(
        "env_or({name:?}, \"undefined_variable_value\") = {:?}",
        env_or(&name, "undefined_variable_value")
    );
    println!("env_value({name:?}, false) = {}", env_value(&name, false));

    Ok(())
}
