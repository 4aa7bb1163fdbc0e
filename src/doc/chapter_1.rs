/*!
# Expressions and Variables

There are 26 variables named `a` through `z`. Each holds a signed 16 bit
integer and starts at zero. There are no other types. Strings may only
appear as literals in `print` and `display`.

```text
a = 5;
b = a * 3 + 1
```

Numbers are written in decimal with at most six digits and must not
exceed 32767. Arithmetic wraps around instead of overflowing.

## Operators
From lowest to highest precedence.

| Operator | Meaning |
|---|---|
| `<` `>` `=` | comparison, 1 when true and 0 when false |
| `+` `-` `&` `\|` | add, subtract, bitwise and, bitwise or |
| `*` `/` `%` | multiply, divide, remainder |
| `-` | negation |

Operators of equal precedence are evaluated left to right, so
`2 + 3 * 4` is 14 and `1 < 2 = 1` is 1. Parentheses group as usual.

Division truncates toward zero. Dividing by zero stops the program
with `DIVISION BY ZERO`.

A relation is true when it is not zero.
```text
if a & 1 { print 'odd' }
```
*/
