use crate::cli::StyleArgs;
use crate::error::Result;
use repeatmap::engine::state::{InteractionState, latest_selection};
use repeatmap::workflows::{startup, view};
use std::fs;
use tracing::info;

pub fn run(args: StyleArgs) -> Result<()> {
    let ctx = startup::build_context(&args.atoms, args.domain_table.as_deref())?;

    let state = InteractionState {
        selection: latest_selection(&args.select),
        domain_highlight: args.domain_highlight,
        mode: args.mode,
    };
    let styles = view::restyle(&ctx, &state)?;
    info!(entries = styles.len(), "resolved style array");

    let encoded = serde_json::to_string_pretty(&styles)?;
    match &args.output {
        Some(path) => {
            fs::write(path, encoded)?;
            info!(path = %path.display(), "wrote style array");
        }
        None => println!("{encoded}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repeatmap::engine::state::RenderMode;
    use std::io::Write;

    fn atom_table() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "residue_index,residue_name,chain,element,x,y,z\n\
             5,ALA,A,C,0.0,0.0,0.0\n\
             130,GLY,A,N,0.0,0.0,0.0\n\
             95,SER,A,O,0.0,0.0,0.0\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn writes_style_array_for_selection() {
        let atoms = atom_table();
        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("styles.json");

        run(StyleArgs {
            atoms: atoms.path().to_path_buf(),
            select: vec![4, 2],
            domain_highlight: true,
            mode: RenderMode::Cartoon,
            domain_table: None,
            output: Some(out_path.clone()),
        })
        .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_path).unwrap()).unwrap();
        let entries = written.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["color"], "red");
        assert_eq!(entries[1]["color"], "grey");
        assert_eq!(entries[2]["color"], "yellow");
        assert_eq!(entries[0]["visualization_type"], "cartoon");
    }

    #[test]
    fn out_of_range_selection_fails_the_command() {
        let atoms = atom_table();

        let result = run(StyleArgs {
            atoms: atoms.path().to_path_buf(),
            select: vec![99],
            domain_highlight: false,
            mode: RenderMode::Cartoon,
            domain_table: None,
            output: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn empty_atom_table_fails_before_styling() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "residue_index,residue_name,chain,element,x,y,z\n").unwrap();

        let result = run(StyleArgs {
            atoms: file.path().to_path_buf(),
            select: vec![],
            domain_highlight: false,
            mode: RenderMode::Cartoon,
            domain_table: None,
            output: None,
        });
        assert!(result.is_err());
    }
}
