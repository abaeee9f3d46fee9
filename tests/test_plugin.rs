//! The analysis contract: (line, column, message) tuples per violation,
//! with 1-based lines, 0-based columns, and a fixed message.

use no_private_methods::location::LineIndex;
use no_private_methods::rules::get_all_rules;
use no_private_methods::check_module;
use rustpython_parser::{parse, Mode};

const MESSAGE: &str = "NPM100 private methods forbidden";

/// All special method names reserved by the language protocol.
const DUNDER_METHODS: &[&str] = &[
    "__init__",
    "__new__",
    "__del__",
    "__repr__",
    "__str__",
    "__bytes__",
    "__format__",
    "__lt__",
    "__le__",
    "__eq__",
    "__ne__",
    "__gt__",
    "__ge__",
    "__hash__",
    "__bool__",
    "__getattr__",
    "__getattribute__",
    "__setattr__",
    "__delattr__",
    "__dir__",
    "__get__",
    "__set__",
    "__delete__",
    "__init_subclass__",
    "__set_name__",
    "__instancecheck__",
    "__subclasscheck__",
    "__class_getitem__",
    "__call__",
    "__len__",
    "__length_hint__",
    "__getitem__",
    "__setitem__",
    "__delitem__",
    "__missing__",
    "__iter__",
    "__reversed__",
    "__contains__",
    "__add__",
    "__radd__",
    "__iadd__",
    "__sub__",
    "__mul__",
    "__matmul__",
    "__truediv__",
    "__floordiv__",
    "__mod__",
    "__divmod__",
    "__pow__",
    "__lshift__",
    "__rshift__",
    "__and__",
    "__xor__",
    "__or__",
    "__neg__",
    "__pos__",
    "__abs__",
    "__invert__",
    "__complex__",
    "__int__",
    "__float__",
    "__index__",
    "__round__",
    "__trunc__",
    "__floor__",
    "__ceil__",
    "__enter__",
    "__exit__",
    "__await__",
    "__aiter__",
    "__anext__",
    "__aenter__",
    "__aexit__",
];

/// Parse a snippet and return the reported (line, column, message) tuples.
fn plugin_run(code: &str) -> Vec<(usize, usize, String)> {
    let ast = parse(code, Mode::Module, "test.py").unwrap();
    let rules = get_all_rules();
    let line_index = LineIndex::new(code);

    check_module(&ast, "test.py", &rules)
        .into_iter()
        .map(|violation| {
            let (line, column) = line_index.get_location(violation.offset);
            (line, column, violation.message)
        })
        .collect()
}

#[test]
fn test_valid() {
    for definition in [
        "def move(self, to_x: int, to_y: int):",
        "async def move(self, to_x: int, to_y: int):",
    ] {
        let code = [
            "class Animal(object):",
            "",
            &format!("    {definition}"),
            "        pass",
        ]
        .join("\n");

        assert!(plugin_run(&code).is_empty(), "{definition}");
    }
}

#[test]
fn test_invalid() {
    for method_name in [
        "def _move",
        "def __move",
        "async def _move",
        "async def __move",
    ] {
        let code = [
            "class Animal(object):",
            "",
            &format!("    {method_name}(self, to_x: int, to_y: int):"),
            "        pass",
            "",
        ]
        .join("\n");

        assert_eq!(
            plugin_run(&code),
            vec![(3, 4, MESSAGE.to_string())],
            "{method_name}"
        );
    }
}

#[test]
fn test_dunder_methods() {
    for dunder_method in DUNDER_METHODS {
        let code = [
            "class Animal(object):",
            "",
            &format!("    def {dunder_method}(self):"),
            "        pass",
        ]
        .join("\n");

        assert!(plugin_run(&code).is_empty(), "{dunder_method}");
    }
}

#[test]
fn test_dunder_methods_async() {
    for dunder_method in DUNDER_METHODS {
        let code = [
            "class Animal(object):",
            "",
            &format!("    async def {dunder_method}(self):"),
            "        pass",
        ]
        .join("\n");

        assert!(plugin_run(&code).is_empty(), "{dunder_method}");
    }
}

#[test]
fn test_two_private_methods_in_declaration_order() {
    let code = [
        "class Animal(object):",
        "",
        "    def _move(self, to_x, to_y):",
        "        pass",
        "",
        "    def __avoid_obstacles(self):",
        "        pass",
    ]
    .join("\n");

    assert_eq!(
        plugin_run(&code),
        vec![(3, 4, MESSAGE.to_string()), (6, 4, MESSAGE.to_string())]
    );
}

#[test]
fn test_empty_class() {
    let code = ["class Animal(object):", "    pass"].join("\n");
    assert!(plugin_run(&code).is_empty());
}

#[test]
fn test_only_dunder_methods() {
    let code = [
        "class Animal(object):",
        "",
        "    def __init__(self):",
        "        pass",
        "",
        "    def __len__(self):",
        "        return 0",
    ]
    .join("\n");

    assert!(plugin_run(&code).is_empty());
}

#[test]
fn test_deeper_indentation_is_reported() {
    let code = [
        "class Outer:",
        "    class Inner:",
        "        def _hide(self):",
        "            pass",
    ]
    .join("\n");

    assert_eq!(plugin_run(&code), vec![(3, 8, MESSAGE.to_string())]);
}
