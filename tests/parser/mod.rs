mod tests_groupings;
mod tests_parse;
