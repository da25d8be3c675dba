use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    notemerge completions bash > ~/.bash_completion.d/notemerge\n\n\
                  Generate zsh completions:\n    notemerge completions zsh > ~/.zfunc/_notemerge\n\n\
                  Generate fish completions:\n    notemerge completions fish > ~/.config/fish/completions/notemerge.fish\n\n\
                  Generate PowerShell completions:\n    notemerge completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
