use ormlet_core::schema::Name;
use syn::parse::ParseStream;

#[derive(Debug)]
pub(crate) enum Association {
    BelongsTo(Relation),
    HasMany(Relation),
    HasOneThrough(Through),
}

/// `#[belongs_to(..)]` or `#[has_many(..)]`
#[derive(Debug)]
pub(crate) struct Relation {
    pub(crate) name: syn::Ident,
    pub(crate) foreign_key: Option<String>,
    pub(crate) primary_key: Option<String>,
    pub(crate) class_name: Option<String>,

    /// Type returned by the generated accessor
    pub(crate) target: syn::Ident,
}

/// `#[has_one_through(name, through = .., source = ..)]`
#[derive(Debug)]
pub(crate) struct Through {
    pub(crate) name: syn::Ident,
    pub(crate) through: String,
    pub(crate) source: String,

    /// Type returned by the generated accessor
    pub(crate) target: syn::Ident,
}

impl Association {
    pub(crate) fn from_ast(attr: &syn::Attribute) -> syn::Result<Option<Self>> {
        let path = attr.path();

        if path.is_ident("belongs_to") {
            Ok(Some(Association::BelongsTo(Relation::from_ast(attr)?)))
        } else if path.is_ident("has_many") {
            Ok(Some(Association::HasMany(Relation::from_ast(attr)?)))
        } else if path.is_ident("has_one_through") {
            Ok(Some(Association::HasOneThrough(Through::from_ast(attr)?)))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn name(&self) -> &syn::Ident {
        match self {
            Association::BelongsTo(relation) | Association::HasMany(relation) => &relation.name,
            Association::HasOneThrough(through) => &through.name,
        }
    }
}

impl Relation {
    fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        attr.parse_args_with(|input: ParseStream| {
            let name: syn::Ident = input.parse()?;
            let mut foreign_key = None;
            let mut primary_key = None;
            let mut class_name = None;
            let mut class_span = name.span();

            parse_options(input, |key, input| {
                if key == "foreign_key" {
                    foreign_key = Some(parse_value(input)?);
                } else if key == "primary_key" {
                    primary_key = Some(parse_value(input)?);
                } else if key == "class_name" {
                    class_span = input.span();
                    class_name = Some(parse_value(input)?);
                } else {
                    return Err(syn::Error::new_spanned(
                        key,
                        "expected `foreign_key`, `primary_key`, or `class_name`",
                    ));
                }
                Ok(())
            })?;

            let target = match &class_name {
                Some(class_name) => target_ident(class_name, class_span)?,
                None => target_ident(&Name::class_name(&name.to_string()), name.span())?,
            };

            Ok(Self {
                name,
                foreign_key,
                primary_key,
                class_name,
                target,
            })
        })
    }
}

impl Through {
    fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        attr.parse_args_with(|input: ParseStream| {
            let name: syn::Ident = input.parse()?;
            let mut through = None;
            let mut source: Option<String> = None;
            let mut class_name = None;
            let mut class_span = name.span();

            parse_options(input, |key, input| {
                if key == "through" {
                    through = Some(parse_value(input)?);
                } else if key == "source" {
                    source = Some(parse_value(input)?);
                } else if key == "class_name" {
                    class_span = input.span();
                    class_name = Some(parse_value(input)?);
                } else {
                    return Err(syn::Error::new_spanned(
                        key,
                        "expected `through`, `source`, or `class_name`",
                    ));
                }
                Ok(())
            })?;

            let (Some(through), Some(source)) = (through, source) else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `has_one_through(name, through = <association>, source = <association>)`",
                ));
            };

            // The accessor returns the source association's target type
            let target = match &class_name {
                Some(class_name) => target_ident(class_name, class_span)?,
                None => target_ident(&Name::class_name(&source), name.span())?,
            };

            Ok(Self {
                name,
                through,
                source,
                target,
            })
        })
    }
}

/// Parses the `, key = value` pairs following the association name.
fn parse_options(
    input: ParseStream,
    mut f: impl FnMut(&syn::Ident, ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    while !input.is_empty() {
        input.parse::<syn::Token![,]>()?;

        if input.is_empty() {
            break;
        }

        let key: syn::Ident = input.parse()?;
        input.parse::<syn::Token![=]>()?;
        f(&key, input)?;
    }

    Ok(())
}

/// Option values may be written as a bare identifier or a string literal.
fn parse_value(input: ParseStream) -> syn::Result<String> {
    if input.peek(syn::LitStr) {
        Ok(input.parse::<syn::LitStr>()?.value())
    } else {
        Ok(input.parse::<syn::Ident>()?.to_string())
    }
}

fn target_ident(class_name: &str, span: proc_macro2::Span) -> syn::Result<syn::Ident> {
    syn::parse_str::<syn::Ident>(class_name)
        .map(|ident| syn::Ident::new(&ident.to_string(), span))
        .map_err(|_| syn::Error::new(span, format!("`{class_name}` is not a type name")))
}
