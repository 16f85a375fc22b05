#[test]
fn macros_expand_and_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pantry_error_pass.rs");
    t.pass("tests/ui/pantry_slice_pass.rs");
}

#[test]
fn malformed_macro_input_is_rejected() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/pantry_error_tuple_variant.rs");
    t.compile_fail("tests/ui/pantry_error_missing_context.rs");
    t.compile_fail("tests/ui/pantry_error_bad_context.rs");
    t.compile_fail("tests/ui/pantry_slice_generic.rs");
    t.compile_fail("tests/ui/main_unknown_profile.rs");
}
