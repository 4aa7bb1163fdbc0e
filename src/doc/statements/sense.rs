/*!
# `sense <channel> <variable>`
Abbreviation `se`.
## Purpose
Reads a sensor into a variable.

## Remarks
Channels 0 to 7 are analog inputs. Channels 16 to 19 read switches A to D
as 1 when pressed and 0 when not. The channel must be a number.

## Example
```text
sense 16 s;
if s { print 'switch A' }
```

*/
