/// Build a [`Row`](crate::stmt::Row) from `column => value` pairs, keeping
/// the order in which the pairs are written.
///
/// ```
/// let row = ormlet_core::row! { "name" => "Haskell", "owner_id" => 3_i64 };
/// assert_eq!(row.keys().collect::<Vec<_>>(), ["name", "owner_id"]);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::stmt::Row::new()
    };
    (
        $( $column:expr => $value:expr ),+ $(,)?
    ) => {{
        let mut row = $crate::stmt::Row::new();
        $(
            row.insert(
                ::std::string::String::from($column),
                $crate::stmt::Value::from($value),
            );
        )+
        row
    }};
}
