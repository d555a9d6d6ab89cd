//! RouterOS API CLI
//!
//! Command-line front end: raw queries plus a few typed built-in reports.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use zeroize::Zeroizing;

use rosapi::typed::{Interface, RegistrationEntry, SystemHealth, SystemResource};
use rosapi::{ConnectConfig, Connection, Reply, Result, DEFAULT_API_PORT};

/// RouterOS API client
///
/// A command starting with `/` is sent verbatim as a raw query, with any
/// trailing arguments as its words. The built-in commands `interface`,
/// `registration-table`, `system-resource` and `system-health` print typed
/// reports instead.
#[derive(Parser, Debug)]
#[command(name = "rosapi-cli")]
#[command(about = "CLI for the MikroTik RouterOS management API")]
#[command(version)]
struct Args {
    /// Username to authenticate with
    #[arg(short, long, default_value = "admin")]
    user: String,

    /// API service port
    #[arg(short = 'P', long, default_value_t = DEFAULT_API_PORT)]
    port: u16,

    /// Socket read/write timeout in milliseconds (0 = none)
    #[arg(short, long, default_value = "0")]
    timeout_ms: u64,

    /// Router hostname or address
    host: String,

    /// Command to run (`/...` for raw queries, or a built-in)
    command: String,

    /// Arguments for a raw query (e.g. `=name=ether1`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rosapi=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ConnectConfig::builder()
        .host(&args.host)
        .port(args.port)
        .username(&args.user)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let password = Zeroizing::new(
        rpassword::prompt_password(format!("Password for user {}: ", args.user))
            .map_err(rosapi::RosError::Io)?,
    );

    let mut conn = Connection::connect(&config, &password)?;

    if args.command.starts_with('/') {
        let words: Vec<&str> = args.args.iter().map(String::as_str).collect();
        conn.query_with(&args.command, &words, |reply| {
            print_reply(reply);
            Ok(())
        })?;
    } else {
        match args.command.as_str() {
            "interface" => print_interfaces(&conn.interfaces()?),
            "registration-table" => print_registrations(&conn.registration_table()?),
            "system-resource" => print_resource(&conn.system_resource()?),
            "system-health" => print_health(&conn.system_health()?),
            other => {
                return Err(rosapi::RosError::InvalidArgument(format!(
                    "Unknown built-in command `{}`. Missing a leading slash?",
                    other
                )));
            }
        }
    }

    conn.close();
    Ok(())
}

fn print_reply(reply: &Reply) {
    for sentence in reply {
        println!("Status: {}", sentence.status());
        for (i, (key, value)) in sentence.attributes().enumerate() {
            println!("  Param {}: {} = {}", i, key, value);
        }
        println!("===");
    }
}

fn print_interfaces(interfaces: &[Interface]) {
    for i in interfaces {
        println!("=== {} ===", i.name);
        println!("Type:    {:>12}", i.kind);
        println!("Comment: {:>12}", i.comment);
        println!("Bytes:   {:>12} / {:>12}", i.rx_bytes, i.tx_bytes);
        println!("Packets: {:>12} / {:>12}", i.rx_packets, i.tx_packets);
        println!("Errors:  {:>12} / {:>12}", i.rx_errors, i.tx_errors);
        println!("Drops:   {:>12} / {:>12}", i.rx_drops, i.tx_drops);
        println!("MTU:     {:>12}", i.mtu);
        println!("L2 MTU:  {:>12}", i.l2mtu);
        println!("Running: {:>12}", i.running);
        println!("Dynamic: {:>12}", i.dynamic);
        println!("Enabled: {:>12}", i.enabled);
    }
}

fn print_registrations(entries: &[RegistrationEntry]) {
    for r in entries {
        println!("=== {} / {} ===", r.interface, r.radio_name);
        let mode = if r.ap {
            if r.wds {
                "AP with WDS"
            } else {
                "Access point"
            }
        } else {
            "Station"
        };
        println!("Mode:           {:>12}", mode);
        println!("Rate:           {:>7} Mbps / {:>7} Mbps", r.rx_rate, r.tx_rate);
        println!("Packets:        {:>12} / {:>12}", r.rx_packets, r.tx_packets);
        println!("Bytes:          {:>12} / {:>12}", r.rx_bytes, r.tx_bytes);
        println!("Frames:         {:>12} / {:>12}", r.rx_frames, r.tx_frames);
        println!(
            "Frame Bytes:    {:>12} / {:>12}",
            r.rx_frame_bytes, r.tx_frame_bytes
        );
        println!(
            "HW Frames:      {:>12} / {:>12}",
            r.rx_hw_frames, r.tx_hw_frames
        );
        println!(
            "HW Frame Bytes: {:>12} / {:>12}",
            r.rx_hw_frame_bytes, r.tx_hw_frame_bytes
        );
        println!("Quality:        {:>10} % / {:>10} %", r.rx_ccq, r.tx_ccq);
        println!(
            "Signal str.:    {:>8} dBm / {:>8} dBm",
            r.rx_signal_strength, r.tx_signal_strength
        );
        println!("Signal / noise: {:>8} dBm", r.signal_to_noise);
    }
}

fn print_resource(r: &SystemResource) {
    let used_memory = r.total_memory.saturating_sub(r.free_memory);
    let used_hdd_space = r.total_hdd_space.saturating_sub(r.free_hdd_space);
    let percent = |part: u64, whole: u64| {
        if whole == 0 {
            0.0
        } else {
            100.0 * part as f64 / whole as f64
        }
    };

    println!("====== System resources ======");
    println!("Uptime:            {:>10.2} days", r.uptime_secs as f64 / 86_400.0);
    println!("RouterOS version:  {:>11}", r.version);
    println!("Architecture name: {:>11}", r.architecture_name);
    println!("Board name:        {:>11}", r.board_name);
    println!("CPU model:         {:>11}", r.cpu_model);
    println!("CPU count:         {:>11}", r.cpu_count);
    println!("CPU load:          {:>11}", r.cpu_load);
    println!(
        "CPU frequency:     {:>11} MHz",
        r.cpu_frequency_hz / 1_000_000
    );
    println!(
        "Memory free:   {:>12} Byte ({:4.1} %)",
        r.free_memory,
        percent(r.free_memory, r.total_memory)
    );
    println!(
        "Memory used:   {:>12} Byte ({:4.1} %)",
        used_memory,
        percent(used_memory, r.total_memory)
    );
    println!("Memory total:  {:>12} Byte", r.total_memory);
    println!(
        "Space free:    {:>12} Byte ({:4.1} %)",
        r.free_hdd_space,
        percent(r.free_hdd_space, r.total_hdd_space)
    );
    println!(
        "Space used:    {:>12} Byte ({:4.1} %)",
        used_hdd_space,
        percent(used_hdd_space, r.total_hdd_space)
    );
    println!("Space total:   {:>12} Byte", r.total_hdd_space);
    println!(
        "Sectors written: {:>10} ({})",
        r.write_sect_since_reboot, r.write_sect_total
    );
    println!("Bad blocks:    {:>12}", r.bad_blocks);
}

fn print_health(h: &SystemHealth) {
    println!("====== System health ======");
    println!("Voltage:     {:>8} V", h.voltage);
    println!("Temperature: {:>8} C", h.temperature);
}
