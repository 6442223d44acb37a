use crate::cli::TablesArgs;
use crate::error::Result;
use repeatmap::core::annotations::domain::DomainTable;
use repeatmap::core::annotations::region::RegionTable;

pub fn run(args: TablesArgs) -> Result<()> {
    let regions = RegionTable::canonical();
    let domains = match &args.domain_table {
        Some(path) => DomainTable::load(path)?,
        None => DomainTable::canonical(),
    };

    println!("Regions:");
    for range in regions.ranges() {
        println!("  {:>4} - {:<4}  {}", range.start, range.end, range.label);
    }

    println!();
    println!("Domains:");
    if domains.ranges().is_empty() {
        println!("  (none configured)");
    }
    for range in domains.ranges() {
        println!("  {:>4} - {:<4}  {}", range.start, range.end, range.label);
    }
    Ok(())
}
