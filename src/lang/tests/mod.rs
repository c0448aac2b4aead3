use super::*;


fn lines(src: &str) -> Vec<Line> {
    lex(src)
}
