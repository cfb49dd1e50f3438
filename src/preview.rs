use crate::vfs::VirtualFS;
use colored::Colorize;
use std::path::Path;

/// Print the pending writes as a small tree rooted at the destination
/// directory. All staged paths are flat, so the tree is one level deep.
pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    println!("{}", root_name.blue());

    let len = vfs.entries.len();
    for (i, entry) in vfs.entries.iter().enumerate() {
        let connector = if i == len - 1 {
            "└── ".yellow()
        } else {
            "├── ".yellow()
        };

        println!("{}{}", connector, entry.destination.display().to_string().green());
    }

    println!();
}
