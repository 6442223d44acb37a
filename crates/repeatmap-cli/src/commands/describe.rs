use crate::cli::DescribeArgs;
use crate::error::Result;
use repeatmap::engine::state::latest_selection;
use repeatmap::workflows::{startup, view};

pub fn run(args: DescribeArgs) -> Result<()> {
    let ctx = startup::build_context(&args.atoms, args.domain_table.as_deref())?;

    let summary = view::describe_selection(&ctx, latest_selection(&args.select))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
