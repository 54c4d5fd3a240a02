//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive `Solver` by dispatching each part to its `PartSolver<N>` impl
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: required, `1..=255`
///
/// Every `PartSolver<1>` through `PartSolver<N>` must be implemented; a
/// missing one is a compile error naming the unsatisfied trait bound.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Chiton;
///
/// impl AocParser for Chiton { /* ... */ }
/// impl PartSolver<1> for Chiton { /* ... */ }
/// impl PartSolver<2> for Chiton { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AocSolver requires #[aoc_solver(max_parts = N)]")
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unknown aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(0) => return Err(syn::Error::new_spanned(attr, "max_parts must be at least 1")),
        Some(n) => n,
        None => return Err(syn::Error::new_spanned(attr, "missing `max_parts`")),
    };

    let arms = (1..=max_parts).map(|part| {
        let part_lit = proc_macro2::Literal::u8_unsuffixed(part);
        quote! {
            #part_lit => <Self as ::aoc_solver::PartSolver<#part_lit>>::solve(shared),
        }
    });
    let parts_lit = proc_macro2::Literal::u8_unsuffixed(max_parts);

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

/// Derive plugin registration for a `Solver`
///
/// Submits the type to `inventory` so `SolverRegistryBuilder::register_all_plugins`
/// picks it up without any manual wiring.
///
/// # Attributes
///
/// - `year`: required, e.g. `2021`
/// - `day`: required, `1..=25`
/// - `tags`: optional array of string literals for filtering
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2021, day = 15, tags = ["grid", "pathfinding"])]
/// pub struct Chiton;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterSolver needs a concrete type to submit",
        ));
    }

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires #[aoc(year = .., day = ..)]")
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "day must be in 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let content;
            let _eq = meta.value()?;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(|input| input.parse::<LitStr>(), syn::Token![,])?;
            tags.extend(list);
        } else {
            return Err(meta.error("unknown aoc attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;
    let year_lit = proc_macro2::Literal::u16_unsuffixed(year);
    let day_lit = proc_macro2::Literal::u8_unsuffixed(day);

    Ok(quote! {
        // Named trait so a missing `Solver` impl reports a readable bound
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year_lit,
                day: #day_lit,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
