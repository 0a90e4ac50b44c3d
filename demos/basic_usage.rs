use linprobe::amigonet::{AmigoNet, Session};
use linprobe::hash_map::{long_hash, OpenAddressTable};
use linprobe::{Config, Result, TableConfig};
use std::fmt;

fn main() -> Result<()> {
    linprobe::init();
    println!("=== Linprobe Demo ===\n");

    println!("1. Table with injected behavior:");
    let mut table = OpenAddressTable::create(
        |k: &i64| long_hash(*k),
        |a: &i64, b: &i64| a == b,
        |out: &mut dyn fmt::Write, k: &i64, v: &String| write!(out, "{} -> {}", k, v),
        4,
    )?;
    for (k, v) in [(1, "one"), (2, "two"), (3, "three"), (-4, "minus four")] {
        table.put(k, v.to_string())?;
    }
    println!("   get(3) = {:?}", table.get(&3));
    println!("   has(5) = {}", table.has(&5));
    print!("{}", table.dump_string(true)?);

    println!("\n2. Configuration presets:");
    for (name, config) in [
        ("balanced", TableConfig::balanced_preset()),
        ("performance", TableConfig::performance_preset()),
        ("memory", TableConfig::memory_preset()),
    ] {
        let mut table = OpenAddressTable::with_config(config)?;
        for i in 0..1000u32 {
            table.put(i, i * i)?;
        }
        println!("   {:<12} {}", name, table.stats().to_string().replace('\n', "  "));
    }

    println!("\n3. AmigoNet session:");
    let mut session = Session::new(AmigoNet::with_config(TableConfig::with_capacity(2))?);
    let script = "# registering\naddUser Jane Doe 01/02/2000\naddUser John Roe 03/04/1999\nbogus\ncountUsers\nexit\n";
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = session.run(script.as_bytes(), &mut out, &mut err)?;
    println!("   stdout: {:?}", String::from_utf8_lossy(&out));
    println!("   stderr: {:?}", String::from_utf8_lossy(&err));
    println!("   {:?}", summary);

    let network = session.into_network();
    network.dump(&mut std::io::stdout(), false)?;
    network.destroy();
    Ok(())
}
