use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Error, Expr, LitStr, Result, Token,
};

/// Renders a template to a `String`, escaping every interpolated value.
///
/// ```ignore
/// let html = escape_html!("<b>{}</b>", name)?;
/// ```
#[proc_macro]
pub fn escape_html(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TemplateArgs);
    expand(args, quote!(::sanitizer::render_template))
}

/// Like `escape_html!`, but wraps the result in a `SafeHtml` handle.
#[proc_macro]
pub fn safe_html(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as TemplateArgs);
    expand(args, quote!(::sanitizer::wrap_as_safe_html))
}

struct TemplateArgs {
    template: LitStr,
    values: Vec<Expr>,
}

impl Parse for TemplateArgs {
    fn parse(args: ParseStream) -> Result<Self> {
        let template = args.parse()?;
        let mut values = Vec::new();
        if !args.is_empty() {
            let _: Token![,] = args.parse()?;
            let rest: Punctuated<Expr, Token![,]> = Punctuated::parse_terminated(args)?;
            values.extend(rest);
        }
        Ok(TemplateArgs { template, values })
    }
}

fn expand(args: TemplateArgs, render: TokenStream2) -> TokenStream {
    let fragments = match split(&args.template) {
        Ok(fragments) => fragments,
        Err(error) => return error.to_compile_error().into(),
    };
    if let Err(error) = check_arity(&args.template, &fragments, args.values.len()) {
        return error.to_compile_error().into();
    }
    let values = &args.values;
    let tokens = quote! {
        #render(
            &[#( #fragments ),*],
            &[#( &(#values) as &dyn ::core::fmt::Display ),*],
        )
    };
    tokens.into()
}

/// One value is needed per placeholder, i.e. one fewer than fragments.
fn check_arity(template: &LitStr, fragments: &[String], values: usize) -> Result<()> {
    let placeholders = fragments.len() - 1;
    if placeholders != values {
        return Err(Error::new_spanned(
            template,
            format!("template has {placeholders} placeholders but {values} values were given"),
        ));
    }
    Ok(())
}

const OPEN: char = '{';
const CLOSE: char = '}';

/// Splits the literal at each `{}`, turning `{{` and `}}` into single braces.
fn split(template: &LitStr) -> Result<Vec<String>> {
    let contents = template.value();
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut chars = contents.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            (OPEN, Some(&OPEN)) | (CLOSE, Some(&CLOSE)) => {
                chars.next();
                current.push(c);
            }
            (OPEN, Some(&CLOSE)) => {
                chars.next();
                fragments.push(std::mem::take(&mut current));
            }
            (OPEN, _) => {
                return Err(Error::new_spanned(
                    template,
                    "only empty `{}` placeholders are supported, use `{{` for a literal brace",
                ))
            }
            (CLOSE, _) => {
                return Err(Error::new_spanned(
                    template,
                    "unmatched `}`, use `}}` for a literal brace",
                ))
            }
            _ => current.push(c),
        }
    }
    fragments.push(current);
    Ok(fragments)
}
