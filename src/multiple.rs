use crate::error::PResult;
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// An ordered list of parsers that run one after another
///
/// Implemented for tuples of up to twelve parsers, which yield a tuple of
/// their outputs, and for arrays and `Vec`s of a single parser type, which
/// yield a `Vec`.
pub trait Sequential<S: Sequence> {
    type Outputs;

    /// Run every parser against the remainder left by the previous one
    fn parse_all(&self, input: S) -> PResult<S, Self::Outputs>;
}

macro_rules! impl_sequential_for_tuple {
    ($($parser:ident $output:ident),+) => {
        #[allow(non_snake_case)]
        impl<S, $($output,)+ $($parser,)+> Sequential<S> for ($($parser,)+)
        where
            S: Sequence,
            $($parser: Parser<Input = S, Output = $output>,)+
        {
            type Outputs = ($($output,)+);

            fn parse_all(&self, input: S) -> PResult<S, Self::Outputs> {
                let ($(ref $parser,)+) = *self;
                $(let (input, $output) = $parser.parse(input)?;)+
                Ok((input, ($($output,)+)))
            }
        }
    };
}

impl_sequential_for_tuple!(P1 O1);
impl_sequential_for_tuple!(P1 O1, P2 O2);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3, P4 O4);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3, P4 O4, P5 O5);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6, P7 O7);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6, P7 O7, P8 O8);
impl_sequential_for_tuple!(P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6, P7 O7, P8 O8, P9 O9);
impl_sequential_for_tuple!(
    P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6, P7 O7, P8 O8, P9 O9, P10 O10
);
impl_sequential_for_tuple!(
    P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6, P7 O7, P8 O8, P9 O9, P10 O10, P11 O11
);
impl_sequential_for_tuple!(
    P1 O1, P2 O2, P3 O3, P4 O4, P5 O5, P6 O6, P7 O7, P8 O8, P9 O9, P10 O10, P11 O11, P12 O12
);

fn parse_each<'p, S, P, I>(parsers: I, input: S) -> PResult<S, Vec<P::Output>>
where
    S: Sequence,
    P: Parser<Input = S> + 'p,
    I: ExactSizeIterator<Item = &'p P>,
{
    let mut values = Vec::with_capacity(parsers.len());
    let mut input = input;
    for parser in parsers {
        let (remaining, value) = parser.parse(input)?;
        values.push(value);
        input = remaining;
    }
    Ok((input, values))
}

impl<S, P, const N: usize> Sequential<S> for [P; N]
where
    S: Sequence,
    P: Parser<Input = S>,
{
    type Outputs = Vec<P::Output>;

    fn parse_all(&self, input: S) -> PResult<S, Self::Outputs> {
        parse_each(self.iter(), input)
    }
}

impl<S, P> Sequential<S> for Vec<P>
where
    S: Sequence,
    P: Parser<Input = S>,
{
    type Outputs = Vec<P::Output>;

    fn parse_all(&self, input: S) -> PResult<S, Self::Outputs> {
        parse_each(self.iter(), input)
    }
}

/// Parser combinator that applies a list of parsers in order
///
/// The first failure is returned as-is, positioned wherever the failing
/// parser left it.
pub struct Multiple<L, S> {
    parsers: L,
    _phantom: PhantomData<fn(S)>,
}

impl<L, S> Parser for Multiple<L, S>
where
    S: Sequence,
    L: Sequential<S>,
{
    type Input = S;
    type Output = L::Outputs;

    fn parse(&self, input: S) -> PResult<S, L::Outputs> {
        self.parsers.parse_all(input)
    }
}

/// Apply `parsers` one after another, collecting every value in order
pub fn multiple<L, S>(parsers: L) -> Multiple<L, S>
where
    S: Sequence,
    L: Sequential<S>,
{
    Multiple {
        parsers,
        _phantom: PhantomData,
    }
}
