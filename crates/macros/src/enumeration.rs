//! Closed enumeration declaration macro.

use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, braced, Expr, Ident, LitInt, parse_macro_input, Token, token, Visibility};

/// One `roster!` declaration: attributes, visibility, type name, entry list.
struct RosterDecl {
	attrs: Vec<Attribute>,
	vis: Visibility,
	name: Ident,
	entries: Vec<EntryDecl>,
}

/// A single declared entry.
struct EntryDecl {
	attrs: Vec<Attribute>,
	name: Ident,
	ordinal: Option<OrdinalLit>,
	props: Vec<PropDecl>,
}

/// A manual ordinal literal, sign included.
struct OrdinalLit {
	value: i64,
	span: Span,
}

/// A `key: value` property pair.
struct PropDecl {
	key: Ident,
	value: Expr,
}

impl Parse for RosterDecl {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		let vis: Visibility = input.parse()?;
		let name: Ident = input.parse()?;
		let body;
		braced!(body in input);
		let entries = body
			.parse_terminated(EntryDecl::parse, Token![,])?
			.into_iter()
			.collect();
		Ok(Self {
			attrs,
			vis,
			name,
			entries,
		})
	}
}

impl Parse for EntryDecl {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		let name: Ident = input.parse()?;
		let mut ordinal = None;
		let mut props = Vec::new();
		if input.peek(Token![=]) {
			input.parse::<Token![=]>()?;
			if input.peek(LitInt) || input.peek(Token![-]) {
				ordinal = Some(input.parse()?);
				if input.peek(token::Brace) {
					props = parse_props(input)?;
				}
			} else if input.peek(token::Brace) {
				props = parse_props(input)?;
			} else {
				return Err(input.error("expected an ordinal or a `{ key: value }` block"));
			}
		}
		Ok(Self {
			attrs,
			name,
			ordinal,
			props,
		})
	}
}

impl Parse for OrdinalLit {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let negative = if input.peek(Token![-]) {
			input.parse::<Token![-]>()?;
			true
		} else {
			false
		};
		let lit: LitInt = input.parse()?;
		let magnitude: i64 = lit.base10_parse()?;
		Ok(Self {
			value: if negative { -magnitude } else { magnitude },
			span: lit.span(),
		})
	}
}

impl Parse for PropDecl {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let key: Ident = input.parse()?;
		input.parse::<Token![:]>()?;
		let value: Expr = input.parse()?;
		Ok(Self { key, value })
	}
}

fn parse_props(input: ParseStream) -> syn::Result<Vec<PropDecl>> {
	let body;
	braced!(body in input);
	Ok(body
		.parse_terminated(PropDecl::parse, Token![,])?
		.into_iter()
		.collect())
}

pub(crate) fn expand(input: TokenStream) -> TokenStream {
	let decl = parse_macro_input!(input as RosterDecl);
	match codegen(&decl) {
		Ok(tokens) => tokens.into(),
		Err(e) => e.to_compile_error().into(),
	}
}

/// Validates ordinals and names against the declaration counter, then emits
/// the entry struct, trait impls, per-entry keys, and the `from` lookup
/// alias.
fn codegen(decl: &RosterDecl) -> syn::Result<proc_macro2::TokenStream> {
	let type_name = &decl.name;
	let type_attrs = &decl.attrs;
	let vis = &decl.vis;
	let label = type_name.to_string();

	let mut next_ordinal: i64 = 0;
	let mut seen = HashSet::new();
	let mut declare_calls = Vec::with_capacity(decl.entries.len());
	let mut key_consts = Vec::with_capacity(decl.entries.len());

	for (slot, entry) in decl.entries.iter().enumerate() {
		let entry_name = entry.name.to_string();
		if !seen.insert(entry_name.clone()) {
			return Err(syn::Error::new(
				entry.name.span(),
				format!("`{entry_name}` is declared twice"),
			));
		}

		let manual = match &entry.ordinal {
			Some(lit) if lit.value < 0 => {
				return Err(syn::Error::new(
					lit.span,
					format!("ordinal {} for `{entry_name}` cannot be negative", lit.value),
				));
			}
			Some(lit) if lit.value < next_ordinal => {
				return Err(syn::Error::new(
					lit.span,
					format!(
						"ordinal {} for `{entry_name}` is already taken (next free ordinal is {next_ordinal})",
						lit.value
					),
				));
			}
			Some(lit) => Some(lit.value),
			None => None,
		};
		next_ordinal = manual.unwrap_or(next_ordinal) + 1;

		let props_expr = if entry.props.is_empty() {
			quote! { ::roster::Properties::new() }
		} else {
			let withs = entry.props.iter().map(|prop| {
				let key = prop.key.to_string();
				let value = &prop.value;
				quote! { .with(#key, #value) }
			});
			quote! { ::roster::Properties::new() #(#withs)* }
		};

		declare_calls.push(match manual {
			Some(ordinal) => quote! {
				__builder.declare_at(#entry_name, #ordinal, |meta| #type_name {
					meta,
					props: #props_expr,
				})?;
			},
			None => quote! {
				__builder.declare(#entry_name, |meta| #type_name {
					meta,
					props: #props_expr,
				})?;
			},
		});

		let const_name = &entry.name;
		let key_attrs = if entry.attrs.is_empty() {
			let key_doc = format!("Typed handle for the `{entry_name}` entry.");
			quote! { #[doc = #key_doc] }
		} else {
			let entry_attrs = &entry.attrs;
			quote! { #(#entry_attrs)* }
		};
		key_consts.push(quote! {
			#key_attrs
			#vis const #const_name: ::roster::EntryKey<#type_name> =
				::roster::EntryKey::new(#slot);
		});
	}

	// An empty declaration list leaves the builder untouched before `finish`.
	let builder_binding = if decl.entries.is_empty() {
		quote! { let __builder = ::roster::RosterBuilder::new(#label); }
	} else {
		quote! { let mut __builder = ::roster::RosterBuilder::new(#label); }
	};

	Ok(quote! {
		#(#type_attrs)*
		#vis struct #type_name {
			meta: ::roster::EntryMeta,
			props: ::roster::Properties,
		}

		impl ::roster::RosterEntry for #type_name {
			fn meta(&self) -> &::roster::EntryMeta {
				&self.meta
			}

			fn properties(&self) -> &::roster::Properties {
				&self.props
			}
		}

		impl ::roster::Enumerated for #type_name {
			fn roster() -> &'static ::roster::Roster<Self> {
				static ROSTER: ::std::sync::OnceLock<::roster::Roster<#type_name>> =
					::std::sync::OnceLock::new();
				ROSTER.get_or_init(|| {
					#builder_binding
					let __declared = (|| -> ::core::result::Result<(), ::roster::DeclareError> {
						#(#declare_calls)*
						::core::result::Result::Ok(())
					})();
					match __declared {
						::core::result::Result::Ok(()) => __builder.finish(),
						::core::result::Result::Err(e) => ::core::panic!(
							"enumeration `{}` failed to initialize: {}",
							#label,
							e
						),
					}
				})
			}
		}

		impl #type_name {
			#(#key_consts)*

			#[allow(
				clippy::should_implement_trait,
				reason = "lookup entry point, not a conversion"
			)]
			#vis fn from<'q>(
				query: impl ::core::convert::Into<::roster::Selector<'q>>,
			) -> ::core::option::Option<&'static Self> {
				<Self as ::roster::Enumerated>::find(query)
			}
		}

		impl ::core::fmt::Debug for #type_name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.debug_struct(#label)
					.field("ordinal", &::roster::RosterEntry::ordinal(self))
					.field("name", &::roster::RosterEntry::name(self))
					.finish()
			}
		}

		::roster::__roster_catalog_submit! { #type_name }
	})
}
