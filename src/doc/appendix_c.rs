/*!
# Limits and Internals

| Item | Limit |
|---|---|
| Program memory | 512 bytes including the final NUL |
| Source line | 80 characters |
| Number literal | 6 digits, at most 32767 |
| Variables | 26, `a` to `z` |
| String literal | 40 characters printed |
| Program stores | 4 |

There is no parse tree. The interpreter reads tokens straight from
program memory and a loop rewinds to where its body or condition starts.
Skipped blocks are scanned only to count braces.

Keywords are matched in a fixed order so a full word always wins over an
abbreviation that starts it: `tone` before `to`, `rem` before `re` and
`move` before `mo`. Keywords need no spaces around them, so `ifa<b{`
reads as `if a < b {`.

Each store is kept in a file `program<n>.ubp` holding the full 512 bytes
of program memory and a CRC-32 of them.
*/
