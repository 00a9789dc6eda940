use super::*;

#[test]
fn template_variable_list_wraps_each_name_in_braces() {
    assert_eq!(
        template_variable_list(),
        "{{from_name}}, {{from_email}}, {{company}}, {{service}}, {{message}}, {{reply_to}}"
    );
}
