#![allow(dead_code)]
use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Builds a fixture tree:
/// root/
///   Makefile
///   README.md
///   config.json
///   blob.dat             (binary)
///   src/main.c
///   src/util.c
///   include/util.h
///   archive/old.c        (default-excluded)
///   build/out.o          (default-excluded)
///   private/notes.txt    (ignored via .gitignore)
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("Makefile")
        .write_str("all:\n\tgcc -o app src/main.c src/util.c\n")
        .unwrap();
    td.child("README.md").write_str("# demo project\n").unwrap();
    td.child("config.json")
        .write_str("{ \"debug\": true }\n")
        .unwrap();
    td.child("blob.dat")
        .write_binary(&[0u8, 159, 146, 150, 0, 255])
        .unwrap();

    td.child("src").create_dir_all().unwrap();
    td.child("src/main.c")
        .write_str("int main(void) { return run(); }\n")
        .unwrap();
    td.child("src/util.c")
        .write_str("int run(void) { return 0; }\n")
        .unwrap();

    td.child("include").create_dir_all().unwrap();
    td.child("include/util.h").write_str("int run(void);\n").unwrap();

    td.child("archive").create_dir_all().unwrap();
    td.child("archive/old.c")
        .write_str("int old(void) { return 1; }\n")
        .unwrap();

    td.child("build").create_dir_all().unwrap();
    td.child("build/out.o")
        .write_binary(&[0u8, 1, 2, 3])
        .unwrap();

    td.child("private").create_dir_all().unwrap();
    td.child("private/notes.txt")
        .write_str("scratch notes\n")
        .unwrap();
    td.child(".gitignore").write_str("/private\n").unwrap();

    td
}
