use alloy::primitives::U256;
use bytesize::ByteSize;
use owo_colors::OwoColorize;

pub fn format_gas(gas: U256) -> String {
    let gas: u64 = gas.try_into().unwrap_or(u64::MAX);
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.bright_green().to_string()
    } else if gas <= 7_000_000 {
        text.yellow().to_string()
    } else {
        text.bright_purple().to_string()
    }
}

/// Pretty-prints an init code size based on its limits.
pub fn format_code_size(len: usize, mid: u64, max: u64) -> String {
    let len = ByteSize::b(len as u64);
    let mid = ByteSize::kib(mid);
    let max = ByteSize::kib(max);
    if len <= mid {
        len.bright_green().to_string()
    } else if len <= max {
        len.yellow().to_string()
    } else {
        len.bright_purple().to_string()
    }
}

/// Pretty-prints an account balance held in wei.
pub fn format_balance(wei: U256) -> eyre::Result<String> {
    let gwei: u64 = (wei / U256::from(1e9)).try_into()?;
    let eth = gwei as f64 / 1e9;
    Ok(format!("Ξ{eth:.6}"))
}
