use crate::block::{Block, Code};
use crate::chunk::split_text;
use crate::parser::SyntaxNode;

/// Languages accepted by the destination API for code blocks.
///
/// https://developers.notion.com/reference/block#code
const LANGUAGES: &[&str] = &[
    "abap",
    "arduino",
    "bash",
    "basic",
    "c",
    "clojure",
    "coffeescript",
    "c++",
    "c#",
    "css",
    "dart",
    "diff",
    "docker",
    "elixir",
    "elm",
    "erlang",
    "flow",
    "fortran",
    "f#",
    "gherkin",
    "glsl",
    "go",
    "graphql",
    "groovy",
    "haskell",
    "html",
    "java",
    "javascript",
    "json",
    "julia",
    "kotlin",
    "latex",
    "less",
    "lisp",
    "livescript",
    "lua",
    "makefile",
    "markdown",
    "markup",
    "matlab",
    "mermaid",
    "nix",
    "objective-c",
    "ocaml",
    "pascal",
    "perl",
    "php",
    "plain text",
    "powershell",
    "prolog",
    "protobuf",
    "python",
    "r",
    "reason",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scheme",
    "scss",
    "shell",
    "sql",
    "swift",
    "typescript",
    "vb.net",
    "verilog",
    "vhdl",
    "visual basic",
    "webassembly",
    "xml",
    "yaml",
    "java/c/c++/c#",
];

pub fn is_supported_language(language: &str) -> bool {
    LANGUAGES.contains(&language)
}

/// The language tag of an info string (its first word), if supported.
pub fn extract_language(info: &str) -> Option<String> {
    let language = info.split_whitespace().next()?;
    if is_supported_language(language) {
        Some(language.to_string())
    } else {
        log::debug!("unsupported code language {:?}", language);
        None
    }
}

/// Convert a fenced code block. The final line terminator is not part of the
/// code; an empty block produces nothing.
pub fn convert_fenced_code(node: &SyntaxNode, info: &str) -> Option<Block> {
    let text = node.text();
    let content = text
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(text.as_str());
    if content.is_empty() {
        return None;
    }

    Some(Block::Code {
        code: Code {
            rich_text: split_text(content, None),
            language: extract_language(info),
        },
    })
}
