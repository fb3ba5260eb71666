// crates/domain/src/language/builtin.rs
//! 組み込みの言語定義表

use super::grammar::{LanguageDefinition, LanguageGrammar};

struct Entry {
    id: &'static str,
    name: &'static str,
    extensions: &'static [&'static str],
    file_names: &'static [&'static str],
    line: &'static [&'static str],
    block: &'static [(&'static str, &'static str)],
}

const C_BLOCK: &[(&str, &str)] = &[("/*", "*/")];
const SLASH_LINE: &[&str] = &["//"];
const HASH_LINE: &[&str] = &["#"];

// 拡張子が重複した場合は表の前方が優先される
const ENTRIES: &[Entry] = &[
    // C系 (// と /* */)
    Entry { id: "c", name: "C", extensions: &["c"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "c-header", name: "C Header", extensions: &["h"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry {
        id: "cpp",
        name: "C++",
        extensions: &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h++", "ipp"],
        file_names: &[],
        line: SLASH_LINE,
        block: C_BLOCK,
    },
    Entry { id: "csharp", name: "C#", extensions: &["cs"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "go", name: "Go", extensions: &["go"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry {
        id: "rust",
        name: "Rust",
        extensions: &["rs"],
        file_names: &[],
        line: &["//", "///", "//!"],
        block: C_BLOCK,
    },
    Entry { id: "java", name: "Java", extensions: &["java"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry {
        id: "javascript",
        name: "JavaScript",
        extensions: &["js", "mjs", "cjs", "jsx"],
        file_names: &[],
        line: SLASH_LINE,
        block: C_BLOCK,
    },
    Entry {
        id: "typescript",
        name: "TypeScript",
        extensions: &["ts", "tsx", "mts", "cts"],
        file_names: &[],
        line: SLASH_LINE,
        block: C_BLOCK,
    },
    Entry { id: "kotlin", name: "Kotlin", extensions: &["kt", "kts"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "scala", name: "Scala", extensions: &["scala", "sc"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "swift", name: "Swift", extensions: &["swift"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "dart", name: "Dart", extensions: &["dart"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "zig", name: "Zig", extensions: &["zig"], file_names: &[], line: &["//", "///", "//!"], block: &[] },
    Entry {
        id: "d",
        name: "D",
        extensions: &["d"],
        file_names: &[],
        line: SLASH_LINE,
        block: &[("/*", "*/"), ("/+", "+/")],
    },
    Entry { id: "objective-c", name: "Objective-C", extensions: &["m", "mm"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry {
        id: "groovy",
        name: "Groovy",
        extensions: &["groovy", "gradle"],
        file_names: &["Jenkinsfile"],
        line: SLASH_LINE,
        block: C_BLOCK,
    },
    Entry { id: "protobuf", name: "Protocol Buffers", extensions: &["proto"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "solidity", name: "Solidity", extensions: &["sol"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry {
        id: "verilog",
        name: "Verilog",
        extensions: &["v", "sv", "svh"],
        file_names: &[],
        line: SLASH_LINE,
        block: C_BLOCK,
    },
    Entry { id: "css", name: "CSS", extensions: &["css"], file_names: &[], line: &[], block: C_BLOCK },
    Entry { id: "scss", name: "SCSS", extensions: &["scss", "less"], file_names: &[], line: SLASH_LINE, block: C_BLOCK },
    Entry { id: "php", name: "PHP", extensions: &["php"], file_names: &[], line: &["#", "//"], block: C_BLOCK },
    // Hash系
    Entry {
        id: "python",
        name: "Python",
        extensions: &["py", "pyw", "pyi"],
        file_names: &[],
        line: HASH_LINE,
        block: &[("\"\"\"", "\"\"\""), ("'''", "'''")],
    },
    Entry {
        id: "ruby",
        name: "Ruby",
        extensions: &["rb", "rake", "gemspec"],
        file_names: &["Rakefile", "Gemfile"],
        line: HASH_LINE,
        block: &[("=begin", "=end")],
    },
    Entry {
        id: "perl",
        name: "Perl",
        extensions: &["pl", "pm", "perl"],
        file_names: &[],
        line: HASH_LINE,
        block: &[("=pod", "=cut"), ("=head1", "=cut")],
    },
    Entry {
        id: "shell",
        name: "Bourne Shell",
        extensions: &["sh", "bash", "zsh", "ksh"],
        file_names: &[".bashrc", ".zshrc", ".profile"],
        line: HASH_LINE,
        block: &[],
    },
    Entry { id: "fish", name: "Fish", extensions: &["fish"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry {
        id: "powershell",
        name: "PowerShell",
        extensions: &["ps1", "psm1", "psd1"],
        file_names: &[],
        line: HASH_LINE,
        block: &[("<#", "#>")],
    },
    Entry { id: "r", name: "R", extensions: &["r"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry { id: "nim", name: "Nim", extensions: &["nim"], file_names: &[], line: HASH_LINE, block: &[("#[", "]#")] },
    Entry { id: "crystal", name: "Crystal", extensions: &["cr"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry { id: "elixir", name: "Elixir", extensions: &["ex", "exs"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry {
        id: "julia",
        name: "Julia",
        extensions: &["jl"],
        file_names: &[],
        line: HASH_LINE,
        block: &[("#=", "=#")],
    },
    Entry {
        id: "coffeescript",
        name: "CoffeeScript",
        extensions: &["coffee"],
        file_names: &[],
        line: HASH_LINE,
        block: &[("###", "###")],
    },
    Entry { id: "tcl", name: "Tcl", extensions: &["tcl"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry { id: "awk", name: "Awk", extensions: &["awk"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry { id: "yaml", name: "YAML", extensions: &["yml", "yaml"], file_names: &[], line: HASH_LINE, block: &[] },
    Entry { id: "toml", name: "TOML", extensions: &["toml"], file_names: &["Cargo.lock"], line: HASH_LINE, block: &[] },
    Entry { id: "ini", name: "INI", extensions: &["ini", "cfg", "conf"], file_names: &[], line: &[";", "#"], block: &[] },
    Entry {
        id: "makefile",
        name: "Makefile",
        extensions: &["mk", "mak"],
        file_names: &["Makefile", "makefile", "GNUmakefile"],
        line: HASH_LINE,
        block: &[],
    },
    Entry {
        id: "cmake",
        name: "CMake",
        extensions: &["cmake"],
        file_names: &["CMakeLists.txt"],
        line: HASH_LINE,
        block: &[("#[[", "]]")],
    },
    Entry {
        id: "dockerfile",
        name: "Dockerfile",
        extensions: &["dockerfile"],
        file_names: &["Dockerfile", "Containerfile"],
        line: HASH_LINE,
        block: &[],
    },
    Entry { id: "terraform", name: "Terraform", extensions: &["tf", "tfvars"], file_names: &[], line: &["#", "//"], block: C_BLOCK },
    Entry { id: "nix", name: "Nix", extensions: &["nix"], file_names: &[], line: HASH_LINE, block: C_BLOCK },
    Entry { id: "graphql", name: "GraphQL", extensions: &["graphql", "gql"], file_names: &[], line: HASH_LINE, block: &[] },
    // -- 系
    Entry { id: "lua", name: "Lua", extensions: &["lua"], file_names: &[], line: &["--"], block: &[("--[[", "]]")] },
    Entry { id: "sql", name: "SQL", extensions: &["sql"], file_names: &[], line: &["--"], block: C_BLOCK },
    Entry {
        id: "haskell",
        name: "Haskell",
        extensions: &["hs", "lhs"],
        file_names: &[],
        line: &["--"],
        block: &[("{-", "-}")],
    },
    Entry { id: "elm", name: "Elm", extensions: &["elm"], file_names: &[], line: &["--"], block: &[("{-", "-}")] },
    Entry { id: "vhdl", name: "VHDL", extensions: &["vhd", "vhdl"], file_names: &[], line: &["--"], block: &[] },
    Entry { id: "ada", name: "Ada", extensions: &["ada", "adb", "ads"], file_names: &[], line: &["--"], block: &[] },
    // (* *) 系
    Entry { id: "ocaml", name: "OCaml", extensions: &["ml", "mli"], file_names: &[], line: &[], block: &[("(*", "*)")] },
    Entry {
        id: "fsharp",
        name: "F#",
        extensions: &["fs", "fsi", "fsx"],
        file_names: &[],
        line: SLASH_LINE,
        block: &[("(*", "*)")],
    },
    Entry {
        id: "pascal",
        name: "Pascal",
        extensions: &["pas", "dpr"],
        file_names: &[],
        line: SLASH_LINE,
        block: &[("{", "}"), ("(*", "*)")],
    },
    // その他のプレフィックス型
    Entry {
        id: "lisp",
        name: "Lisp",
        extensions: &["lisp", "lsp", "cl", "el"],
        file_names: &[],
        line: &[";"],
        block: &[("#|", "|#")],
    },
    Entry { id: "clojure", name: "Clojure", extensions: &["clj", "cljs", "cljc", "edn"], file_names: &[], line: &[";"], block: &[] },
    Entry { id: "scheme", name: "Scheme", extensions: &["scm", "ss", "rkt"], file_names: &[], line: &[";"], block: &[("#|", "|#")] },
    Entry { id: "erlang", name: "Erlang", extensions: &["erl", "hrl"], file_names: &[], line: &["%"], block: &[] },
    Entry { id: "tex", name: "TeX", extensions: &["tex", "sty", "cls", "ltx"], file_names: &[], line: &["%"], block: &[] },
    Entry {
        id: "matlab",
        name: "MATLAB",
        extensions: &["mat", "mlx", "oct"],
        file_names: &[],
        line: &["%"],
        block: &[("%{", "%}")],
    },
    Entry {
        id: "fortran",
        name: "Fortran",
        extensions: &["f", "f90", "f95", "f03", "f08", "for", "ftn"],
        file_names: &[],
        line: &["!"],
        block: &[],
    },
    Entry { id: "assembly", name: "Assembly", extensions: &["asm", "nasm", "s"], file_names: &[], line: &[";", "#"], block: C_BLOCK },
    Entry { id: "batch", name: "Batch", extensions: &["bat", "cmd"], file_names: &[], line: &["REM", "rem", "::"], block: &[] },
    Entry { id: "vim", name: "Vim Script", extensions: &["vim"], file_names: &[".vimrc"], line: &["\""], block: &[] },
    Entry {
        id: "visual-basic",
        name: "Visual Basic",
        extensions: &["vb", "vbs", "bas"],
        file_names: &[],
        line: &["'", "REM"],
        block: &[],
    },
    // マークアップ
    Entry {
        id: "html",
        name: "HTML",
        extensions: &["html", "htm", "xhtml"],
        file_names: &[],
        line: &[],
        block: &[("<!--", "-->")],
    },
    Entry {
        id: "xml",
        name: "XML",
        extensions: &["xml", "xsl", "xslt", "xsd", "svg"],
        file_names: &[],
        line: &[],
        block: &[("<!--", "-->")],
    },
    Entry { id: "vue", name: "Vue", extensions: &["vue"], file_names: &[], line: SLASH_LINE, block: &[("<!--", "-->"), ("/*", "*/")] },
    Entry { id: "markdown", name: "Markdown", extensions: &["md", "markdown"], file_names: &[], line: &[], block: &[] },
    Entry { id: "json", name: "JSON", extensions: &["json"], file_names: &[], line: &[], block: &[] },
    Entry { id: "plain-text", name: "Plain Text", extensions: &["txt", "text"], file_names: &[], line: &[], block: &[] },
];

/// 組み込み定義を表の順に生成する
pub(super) fn definitions() -> Vec<LanguageDefinition> {
    ENTRIES.iter().map(Entry::to_definition).collect()
}

impl Entry {
    fn to_definition(&self) -> LanguageDefinition {
        let grammar = self.block.iter().fold(
            self.line.iter().fold(LanguageGrammar::plain(), |g, prefix| g.with_line_comment(*prefix)),
            |g, (start, end)| g.with_block_comment(*start, *end),
        );
        LanguageDefinition::new(self.id, self.name, grammar)
            .with_extensions(self.extensions.iter().copied())
            .with_file_names(self.file_names.iter().copied())
    }
}
