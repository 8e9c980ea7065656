use bootforth::runtime::built_ins::register_base_words;
use bootforth::runtime::interpreter::forth_interpreter::ForthInterpreter;
use bootforth::runtime::interpreter::{CodeManagement, InterpreterStack};
use std::{cell::RefCell, rc::Rc};
use test_case::test_case;

/// Run one line of source against a fresh interpreter with the given starting stack.
/// Returns the final stack and everything the line printed.
fn eval(source: &str, init_stack: &[i64]) -> (Vec<i64>, String) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = ForthInterpreter::with_output(output.clone());

    register_base_words(&mut interpreter);

    for &value in init_stack {
        interpreter.push(value);
    }

    interpreter.process_line(source);

    let printed = String::from_utf8(output.borrow().clone()).unwrap();
    (interpreter.stack().clone(), printed)
}

fn eval_stack(source: &str, init_stack: &[i64]) -> Vec<i64> {
    eval(source, init_stack).0
}

#[test_case("42", &[], &[42]; "number")]
#[test_case("-7", &[], &[-7]; "negative number")]
#[test_case("+", &[2, 2], &[4]; "simple add")]
#[test_case("-", &[5, 3], &[2]; "sub pops the top as subtrahend")]
#[test_case("*", &[3, 4], &[12]; "simple mul")]
#[test_case("/", &[12, 3], &[4]; "simple div")]
#[test_case("/", &[-7, 2], &[-4]; "division floors toward negative infinity")]
#[test_case("/", &[7, -2], &[-4]; "division floors with negative divisor")]
#[test_case("+", &[i64::MAX, 1], &[i64::MIN]; "add wraps on overflow")]
#[test_case("-", &[i64::MIN, 1], &[i64::MAX]; "sub wraps on overflow")]
#[test_case("*", &[i64::MAX, 2], &[-2]; "mul wraps on overflow")]
#[test_case("=", &[5, 5], &[-1]; "equal is true")]
#[test_case("=", &[5, 6], &[0]; "equal is false")]
#[test_case("<>", &[5, 6], &[-1]; "not equal is true")]
#[test_case("<>", &[5, 5], &[0]; "not equal is false")]
#[test_case(">", &[5, 3], &[-1]; "greater is true")]
#[test_case(">", &[3, 5], &[0]; "greater is false")]
#[test_case(">", &[1, 1], &[0]; "greater for equal")]
#[test_case("dup", &[42], &[42, 42]; "dup")]
#[test_case("drop", &[1, 2], &[1]; "drop")]
#[test_case("swap", &[1, 2], &[2, 1]; "swap")]
#[test_case("swap swap", &[1, 2, 3], &[1, 2, 3]; "swap twice restores the stack")]
#[test_case("dup drop", &[7], &[7]; "dup drop is a no-op")]
#[test_case("over", &[1, 2], &[1, 2, 1]; "over")]
#[test_case("rot", &[6, 4, 5], &[4, 5, 6]; "rot brings the third value to the top")]
#[test_case("nip", &[1, 2], &[2]; "nip")]
#[test_case("tuck", &[1, 2], &[2, 1, 2]; "tuck")]
#[test_case("0 pick", &[5], &[5, 5]; "pick zero duplicates the top")]
#[test_case("1 pick", &[10, 20], &[10, 20, 10]; "pick copies")]
#[test_case("1 roll", &[1, 2], &[2, 1]; "roll moves")]
#[test_case("2 roll", &[1, 2, 3], &[2, 3, 1]; "roll removes the source value")]
#[test_case("1 2 +", &[], &[3]; "literals then add")]
#[test_case("hex ff", &[], &[255]; "hex literal parsing")]
#[test_case("hex 10", &[], &[16]; "decimal-looking literal in base 16")]
#[test_case("1  2   +", &[], &[3]; "repeated separators are skipped")]
#[test_case("( 1 2 ) 3", &[], &[3]; "comment discards its tokens")]
#[test_case("1 \\ 2 3", &[], &[1]; "line comment discards the rest of the line")]
#[test_case("1 if 42 then", &[], &[42]; "if true executes the branch")]
#[test_case("0 if 42 then", &[], &[]; "if false skips the branch")]
#[test_case("0 if 1 else 2 then", &[], &[2]; "else branch on false")]
#[test_case("1 if 1 else 2 then", &[], &[1]; "if branch on true")]
fn eval_and_check_stack(source: &str, init_stack: &[i64], expected: &[i64]) {
    assert_eq!(eval_stack(source, init_stack), expected);
}

#[test]
fn print_pops_and_prints() {
    let (stack, printed) = eval("1 2 + .", &[]);

    assert_eq!(stack, Vec::<i64>::new());
    assert_eq!(printed, "3\n");
}

#[test]
fn print_respects_pop_order() {
    let (_, printed) = eval("5 3 - .", &[]);

    assert_eq!(printed, "2\n");
}

#[test]
fn print_formats_hex_after_hex_word() {
    let (_, printed) = eval("255 hex .", &[]);

    assert_eq!(printed, "ff\n");
}

#[test]
fn print_pads_hex_to_two_digits() {
    let (_, printed) = eval("10 hex .", &[]);

    assert_eq!(printed, "0a\n");
}

#[test]
fn print_stack_is_non_destructive() {
    let (stack, printed) = eval(".s", &[1, 2, 3]);

    assert_eq!(stack, vec![1, 2, 3]);
    assert_eq!(printed, "<3> 1 2 3\n");
}

#[test]
fn print_stack_when_empty() {
    let (_, printed) = eval(".s", &[]);

    assert_eq!(printed, "<0> \n");
}

#[test]
fn conditional_print_false_prints_nothing() {
    let (_, printed) = eval("0 if 99 . then", &[]);

    assert_eq!(printed, "");
}

#[test]
fn conditional_print_true_prints() {
    let (_, printed) = eval("1 if 99 . then", &[]);

    assert_eq!(printed, "99\n");
}

#[test]
fn conditional_print_else_branch() {
    let (_, printed) = eval("0 if 1 . else 2 . then", &[]);

    assert_eq!(printed, "2\n");
}

#[test]
fn undefined_symbol_reports_and_leaves_stack() {
    let (stack, printed) = eval("foo", &[4, 5]);

    assert_eq!(stack, vec![4, 5]);
    assert_eq!(printed, "symbol 'foo' not defined\n");
}

#[test]
fn undefined_symbol_aborts_the_rest_of_the_line() {
    let (stack, printed) = eval("1 foo 2", &[]);

    assert_eq!(stack, vec![1]);
    assert_eq!(printed, "symbol 'foo' not defined\n");
}

#[test]
fn underflow_reports_empty_stack() {
    let (stack, printed) = eval("+", &[]);

    assert_eq!(stack, Vec::<i64>::new());
    assert_eq!(printed, "empty stack\n");
}

#[test]
fn underflow_keeps_committed_pops() {
    // The first operand is consumed before the second pop fails.
    let (stack, printed) = eval("1 + 2", &[]);

    assert_eq!(stack, Vec::<i64>::new());
    assert_eq!(printed, "empty stack\n");
}

#[test]
fn pick_out_of_range_is_underflow() {
    let (_, printed) = eval("5 pick", &[1]);

    assert_eq!(printed, "empty stack\n");
}

#[test]
fn dividing_the_minimum_value_by_negative_one_wraps() {
    let (stack, printed) = eval("-9223372036854775808 -1 /", &[]);

    assert_eq!(stack, vec![i64::MIN]);
    assert_eq!(printed, "");
}

#[test_case("over"; "over underflow")]
#[test_case("nip"; "nip underflow")]
#[test_case("tuck"; "tuck underflow")]
fn depth_probing_words_leave_the_stack_on_underflow(source: &str) {
    let (stack, printed) = eval(source, &[5]);

    assert_eq!(stack, vec![5]);
    assert_eq!(printed, "empty stack\n");
}

#[test]
fn division_by_zero_aborts_the_line() {
    let (stack, printed) = eval("1 0 / 9", &[]);

    assert_eq!(stack, Vec::<i64>::new());
    assert_eq!(printed, "division by zero\n");
}

#[test]
fn malformed_number_is_looked_up_as_a_symbol() {
    let (_, printed) = eval("12x", &[]);

    assert_eq!(printed, "symbol '12x' not defined\n");
}

#[test]
fn comment_state_resets_between_lines() {
    let output = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = ForthInterpreter::with_output(output.clone());

    register_base_words(&mut interpreter);

    interpreter.process_line("( unclosed comment");
    interpreter.process_line("7");

    assert_eq!(interpreter.stack(), &vec![7]);
}

#[test]
fn comment_inside_dead_branch_still_consumes() {
    // The closer of the comment hides a `then`, so the conditional ends at the outer one.
    let (stack, _) = eval("0 if ( then 1 ) 2 then 3", &[]);

    assert_eq!(stack, vec![3]);
}

#[test]
fn error_keeps_the_interpreter_live_for_the_next_line() {
    let output = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = ForthInterpreter::with_output(output.clone());

    register_base_words(&mut interpreter);

    interpreter.process_line("foo");
    interpreter.process_line("1 2 +");

    assert_eq!(interpreter.stack(), &vec![3]);
}
