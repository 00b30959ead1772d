// src/macros.rs

/// `String` construction shorthand: `s!()` for empty, `s!(x)` for `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate any number of string-likes into one owned `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
