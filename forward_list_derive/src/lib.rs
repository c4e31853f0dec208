use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;

        Ok(NodeAttribute {
            crate_path: value.parse()?,
        })
    }
}

/// Returns true if the input carries `#[repr(C)]`, possibly alongside other
/// representation hints such as `align(N)`.
fn has_repr_c(input: &DeriveInput) -> syn::Result<bool> {
    let mut found = false;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("C") {
                found = true;
            }
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream2 = content.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(found)
}

/// Finds the `link` and `data` fields, enforcing that `link` comes first.
///
/// Positions in the list are raw pointers to the link; they are cast back to
/// the node, which is only sound when the link sits at offset zero.
fn node_fields(input: &DeriveInput) -> syn::Result<(Field, Field)> {
    let Data::Struct(DataStruct {
        fields: Fields::Named(fields),
        ..
    }) = &input.data
    else {
        return Err(syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        ));
    };

    let mut link_field = None;
    let mut data_field = None;

    for (index, field) in fields.named.iter().enumerate() {
        let Some(ident) = &field.ident else { continue };
        match ident.to_string().as_str() {
            "link" if index == 0 => link_field = Some(field.clone()),
            "link" => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "field 'link' must be the first field of the node",
                ));
            }
            "data" => data_field = Some(field.clone()),
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Unexpected field name: expected 'link' or 'data'",
                ));
            }
        }
    }

    let link_field = link_field.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'link'")
    })?;
    let data_field = data_field.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "Struct must have a field named 'data'")
    })?;

    Ok((link_field, data_field))
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let mut crate_path = quote! { ::forward_list };
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("node")) {
        let path = attr.parse_args::<NodeAttribute>()?.crate_path;
        crate_path = quote! { #path };
    }

    if !has_repr_c(&input)? {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Node derive macro requires #[repr(C)] so the link sits at offset zero",
        ));
    }

    let (_, data_field) = node_fields(&input)?;
    let data_type = &data_field.ty;

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let forward_path = quote! { #crate_path::linked_list::forward };

    Ok(quote! {
        impl #impl_generics #forward_path::traits::Link for #struct_name #ty_generics #where_clause {
            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<#forward_path::link::SingleLink>> {
                #forward_path::traits::Link::next(&self.link)
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<#forward_path::link::SingleLink>>) {
                #forward_path::traits::Link::set_next(&mut self.link, next);
            }
        }

        impl #impl_generics #forward_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }

            #[inline]
            fn into_data(self) -> Self::Data {
                self.data
            }
        }
    })
}

/// Derive macro for forward list nodes.
///
/// The struct must be `#[repr(C)]` with a `link: SingleLink` first field and
/// a `data` field.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
