// Tests for the expandable value tree and the text dump of the sample session

use valscope::render::Engine;
use valscope::sample::sample_session;
use valscope::ui::dump::dump;
use valscope::ui::ValueTree;

fn row_index<H: Clone>(tree: &ValueTree<H>, label: &str) -> usize {
    tree.rows()
        .iter()
        .position(|row| row.label == label)
        .unwrap_or_else(|| panic!("no row {}", label))
}

#[test]
fn test_roots_start_collapsed() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let tree = ValueTree::new(&engine, &session.roots);

    assert_eq!(tree.len(), session.roots.len());
    assert!(tree.rows().iter().all(|row| row.depth == 0 && !row.expanded));
}

#[test]
fn test_expand_and_collapse() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let mut tree = ValueTree::new(&engine, &session.roots);
    let roots = tree.len();

    let homotopy = row_index(&tree, "homotopy");
    assert!(tree.expand(&engine, homotopy));
    assert!(!tree.expand(&engine, homotopy), "already open");
    assert_eq!(tree.len(), roots + 2);

    let rows = tree.rows();
    assert_eq!(rows[homotopy + 1].label, "dim");
    assert_eq!(rows[homotopy + 1].depth, 1);
    assert_eq!(rows[homotopy + 1].rendered.text(), "1");
    assert_eq!(rows[homotopy + 2].label, "cones");
    assert_eq!(rows[homotopy + 2].rendered.text(), "[Cone]");
    assert_eq!(tree.parent(homotopy + 2), Some(homotopy));
    assert_eq!(tree.parent(homotopy), None);

    assert!(tree.collapse(homotopy));
    assert!(!tree.collapse(homotopy), "already closed");
    assert_eq!(tree.len(), roots);
}

#[test]
fn test_collapse_removes_grandchildren() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let mut tree = ValueTree::new(&engine, &session.roots);
    let roots = tree.len();

    let f = row_index(&tree, "f");
    assert!(tree.expand(&engine, f));
    assert_eq!(tree.rows()[f + 1].label, "diagram");
    assert_eq!(tree.rows()[f + 1].rendered.text(), "DiagInt");
    assert!(tree.expand(&engine, f + 1));
    assert_eq!(tree.rows()[f + 2].label, "src");
    assert_eq!(tree.rows()[f + 2].depth, 2);
    assert_eq!(tree.parent(f + 2), Some(f + 1));

    // The root after `f` is untouched by the nested rows
    let next = &session.roots[session.roots.iter().position(|(n, _)| n == "f").unwrap() + 1].0;
    assert_eq!(tree.rows()[f + 4].label, *next);

    assert!(tree.collapse(f));
    assert_eq!(tree.len(), roots);
    assert_eq!(tree.rows()[f + 1].label, *next);
}

#[test]
fn test_leaves_do_not_expand() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let mut tree = ValueTree::new(&engine, &session.roots);

    let greeting = row_index(&tree, "greeting");
    assert!(!tree.rows()[greeting].is_expandable());
    assert!(!tree.expand(&engine, greeting));
    assert!(!tree.expand(&engine, tree.len()));
    assert!(!tree.collapse(tree.len()));
}

#[test]
fn test_dump_roots() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let out = dump(&engine, &session.roots, 0);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            "  greeting = \"hello, world\"",
            "  ids = [1,2,3]",
            "  maybe = 7",
            "  nothing = None",
            "  x = \"x\", (0:0:+)O",
            "  folder = \"points\"",
            "+ f = \"f\", (2:1:+)OI",
            "+ homotopy = RInt",
            "  orientation = -",
            "  height = r3",
            "  slice = s2",
            "  boundary = Source",
            "  label = Label((Target,1))",
            "+ tree = Tree",
            "  stale = <unreadable>",
            "  dangling = <unreadable>",
            "  cycle = <truncated>",
            "  mystery = homotopy_core::Mystery { depth: 4, flag: true }",
        ]
    );
}

#[test]
fn test_dump_one_level() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let out = dump(&engine, &session.roots, 1);

    let tree_block = "\
- tree = Tree
    len = 4
    root = 0
    0 = 10
    1 = 11
    2 = 12
    3 = 99
";
    assert!(out.contains(tree_block), "{}", out);
    assert!(out.contains("- f = \"f\", (2:1:+)OI\n  + diagram = DiagInt\n"), "{}", out);
    assert!(out.contains("- homotopy = RInt\n    dim = 1\n    cones = [Cone]\n"), "{}", out);
}

#[test]
fn test_dump_two_levels() {
    let session = sample_session().expect("sample session");
    let engine = Engine::new(&session.image);
    let out = dump(&engine, &session.roots, 2);

    assert!(
        out.contains("  - diagram = DiagInt\n      src = (0:0:+)\n      cospans = [Cospan]\n"),
        "{}",
        out
    );
}
